//! Store-level tests driven through the library API, against a real
//! database file like the CLI uses.

mod common;
use common::{open_pool, setup_test_db};

use ttracker::db::queries::clients;
use ttracker::errors::AppError;
use ttracker::models::client::Client;

fn sample_client() -> Client {
    Client::new("Acme", "Jane Doe", "jane@acme.com", "555-0100", "UTC").expect("valid client")
}

#[test]
fn test_insert_round_trip() {
    let db_path = setup_test_db("store_round_trip");
    let pool = open_pool(&db_path);

    let stored = clients::insert(&pool.conn, &sample_client()).expect("insert");
    assert!(stored.id > 0);

    let all = clients::get_all(&pool.conn).expect("get_all");
    assert_eq!(all.len(), 1);

    // Equal to the input except for the assigned id.
    let mut expected = sample_client();
    expected.id = stored.id;
    assert_eq!(all[0], expected);
}

#[test]
fn test_assigned_ids_are_unique_and_never_reused() {
    let db_path = setup_test_db("store_unique_ids");
    let pool = open_pool(&db_path);

    let a = clients::insert(&pool.conn, &sample_client()).unwrap();
    let b = clients::insert(&pool.conn, &sample_client()).unwrap();
    let c = clients::insert(&pool.conn, &sample_client()).unwrap();

    assert!(a.id != b.id && b.id != c.id && a.id != c.id);

    // Even after deleting the newest row its id must not come back.
    clients::delete(&pool.conn, c.id).unwrap();
    let d = clients::insert(&pool.conn, &sample_client()).unwrap();
    assert!(d.id != c.id);
}

#[test]
fn test_update_is_idempotent() {
    let db_path = setup_test_db("store_update_idempotent");
    let pool = open_pool(&db_path);

    let mut stored = clients::insert(&pool.conn, &sample_client()).unwrap();
    stored.company = "Acme Corp".to_string();

    clients::update(&pool.conn, &stored).unwrap();
    let after_first = clients::get_all(&pool.conn).unwrap();

    clients::update(&pool.conn, &stored).unwrap();
    let after_second = clients::get_all(&pool.conn).unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(after_first[0].company, "Acme Corp");
}

#[test]
fn test_update_missing_id_is_reported() {
    let db_path = setup_test_db("store_update_missing");
    let pool = open_pool(&db_path);

    let mut ghost = sample_client();
    ghost.id = 999;

    let err = clients::update(&pool.conn, &ghost).unwrap_err();
    assert!(matches!(err, AppError::NotFound("client", 999)));
}

#[test]
fn test_delete_is_final_and_repeat_is_noop() {
    let db_path = setup_test_db("store_delete");
    let pool = open_pool(&db_path);

    let stored = clients::insert(&pool.conn, &sample_client()).unwrap();

    clients::delete(&pool.conn, stored.id).unwrap();
    assert!(
        clients::get_all(&pool.conn)
            .unwrap()
            .iter()
            .all(|c| c.id != stored.id)
    );

    // Second delete of the same id: no error.
    clients::delete(&pool.conn, stored.id).unwrap();
}

#[test]
fn test_get_by_id() {
    let db_path = setup_test_db("store_get_by_id");
    let pool = open_pool(&db_path);

    assert!(clients::get_by_id(&pool.conn, 1).unwrap().is_none());

    let stored = clients::insert(&pool.conn, &sample_client()).unwrap();
    let found = clients::get_by_id(&pool.conn, stored.id).unwrap();
    assert_eq!(found, Some(stored));
}

#[test]
fn test_get_all_rereads_from_disk() {
    let db_path = setup_test_db("store_reread");
    let pool = open_pool(&db_path);

    clients::insert(&pool.conn, &sample_client()).unwrap();

    // A second, independent connection must observe the same state.
    let other = common::open_pool(&db_path);
    assert_eq!(clients::get_all(&other.conn).unwrap().len(), 1);
}
