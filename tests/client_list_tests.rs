//! ClientList model tests: read-your-writes, change notification and
//! the full-reload-on-mutation policy.

mod common;
use common::{open_pool, setup_test_db};

use std::cell::Cell;
use std::rc::Rc;

use ttracker::core::client_list::ClientList;
use ttracker::db::pool::DbPool;
use ttracker::db::queries::clients;
use ttracker::models::client::Client;

fn sample(name: &str) -> Client {
    Client::new("Acme", name, "jane@acme.com", "555-0100", "UTC").expect("valid client")
}

#[test]
fn test_snapshot_matches_store_after_every_mutation() {
    let db_path = setup_test_db("list_read_your_writes");
    let pool = open_pool(&db_path);
    let mut list = ClientList::new(pool).expect("client list");

    // add
    let mut stored = list.add(&sample("Jane Doe")).unwrap();
    assert_eq!(list.snapshot(), clients::get_all(list.conn()).unwrap());
    assert!(list.snapshot().iter().any(|c| c.id == stored.id));

    // edit
    stored.company = "Acme Corp".to_string();
    list.edit(&stored).unwrap();
    assert_eq!(list.snapshot(), clients::get_all(list.conn()).unwrap());
    assert_eq!(list.snapshot()[0].company, "Acme Corp");

    // remove
    list.remove(&stored).unwrap();
    assert!(list.snapshot().is_empty());
    assert!(clients::get_all(list.conn()).unwrap().is_empty());
}

#[test]
fn test_listeners_fire_on_each_mutation() {
    let db_path = setup_test_db("list_notify");
    let pool = open_pool(&db_path);
    let mut list = ClientList::new(pool).unwrap();

    let fired = Rc::new(Cell::new(0usize));
    let fired_in_listener = Rc::clone(&fired);
    list.subscribe(Box::new(move |_snapshot| {
        fired_in_listener.set(fired_in_listener.get() + 1);
    }));

    let mut stored = list.add(&sample("Jane Doe")).unwrap();
    stored.name = "Jane D.".to_string();
    list.edit(&stored).unwrap();
    list.remove(&stored).unwrap();

    // One notification per mutation-triggered reload.
    assert_eq!(fired.get(), 3);
}

#[test]
fn test_listener_sees_current_snapshot() {
    let db_path = setup_test_db("list_snapshot_content");
    let pool = open_pool(&db_path);
    let mut list = ClientList::new(pool).unwrap();

    let last_len = Rc::new(Cell::new(usize::MAX));
    let last_len_in_listener = Rc::clone(&last_len);
    list.subscribe(Box::new(move |snapshot| {
        last_len_in_listener.set(snapshot.len());
    }));

    list.add(&sample("Jane Doe")).unwrap();
    assert_eq!(last_len.get(), 1);

    list.add(&sample("John Doe")).unwrap();
    assert_eq!(last_len.get(), 2);
}

#[test]
fn test_snapshot_is_sorted_by_id() {
    let db_path = setup_test_db("list_sorted");
    let pool = open_pool(&db_path);
    let mut list = ClientList::new(pool).unwrap();

    list.add(&sample("A")).unwrap();
    list.add(&sample("B")).unwrap();
    list.add(&sample("C")).unwrap();

    let ids: Vec<i32> = list.snapshot().iter().map(|c| c.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_remove_absent_client_is_noop() {
    let db_path = setup_test_db("list_remove_absent");
    let pool = open_pool(&db_path);
    let mut list = ClientList::new(pool).unwrap();

    list.add(&sample("Jane Doe")).unwrap();

    let mut ghost = sample("Ghost");
    ghost.id = 999;
    list.remove(&ghost).unwrap();

    assert_eq!(list.snapshot().len(), 1);
}

#[test]
fn test_external_writes_visible_after_refresh() {
    let db_path = setup_test_db("list_external_refresh");
    let pool = open_pool(&db_path);
    let mut list = ClientList::new(pool).unwrap();
    assert!(list.snapshot().is_empty());

    // Write through a separate connection, behind the model's back.
    let other = DbPool::new(&db_path).unwrap();
    clients::insert(&other.conn, &sample("Jane Doe")).unwrap();

    assert!(list.snapshot().is_empty());
    list.refresh().unwrap();
    assert_eq!(list.snapshot().len(), 1);
}
