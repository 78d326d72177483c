use predicates::str::contains;

mod common;
use common::{add_client, init_db, setup_test_db, ttr};

#[test]
fn test_client_add_and_list() {
    let db_path = setup_test_db("client_add_list");
    init_db(&db_path);

    ttr()
        .args([
            "--db",
            &db_path,
            "client",
            "add",
            "--company",
            "Acme",
            "--name",
            "Jane Doe",
            "--email",
            "jane@acme.com",
            "--phone",
            "555-0100",
            "--tz",
            "UTC",
        ])
        .assert()
        .success()
        .stdout(contains("Client #1 'Jane Doe' added"));

    ttr()
        .args(["--db", &db_path, "client", "list"])
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("Acme"))
        .stdout(contains("jane@acme.com"))
        .stdout(contains("555-0100"))
        .stdout(contains("UTC"));
}

#[test]
fn test_client_edit_changes_only_given_fields() {
    let db_path = setup_test_db("client_edit");
    init_db(&db_path);
    add_client(&db_path, "Acme", "Jane Doe", "jane@acme.com");

    ttr()
        .args([
            "--db",
            &db_path,
            "client",
            "edit",
            "1",
            "--company",
            "Acme Corp",
        ])
        .assert()
        .success()
        .stdout(contains("Client #1 updated"));

    ttr()
        .args(["--db", &db_path, "client", "list"])
        .assert()
        .success()
        .stdout(contains("Acme Corp"))
        .stdout(contains("Jane Doe"))
        .stdout(contains("jane@acme.com"));
}

#[test]
fn test_client_edit_missing_id_is_reported() {
    let db_path = setup_test_db("client_edit_missing");
    init_db(&db_path);

    ttr()
        .args(["--db", &db_path, "client", "edit", "999", "--name", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("No client found with id 999"));
}

#[test]
fn test_client_del_is_final_and_repeat_is_noop() {
    let db_path = setup_test_db("client_del");
    init_db(&db_path);
    add_client(&db_path, "Acme", "Jane Doe", "jane@acme.com");

    ttr()
        .args(["--db", &db_path, "client", "del", "1", "--force"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    ttr()
        .args(["--db", &db_path, "client", "list"])
        .assert()
        .success()
        .stdout(contains("No clients yet"));

    // Deleting the same id again must not fail.
    ttr()
        .args(["--db", &db_path, "client", "del", "1", "--force"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));
}

#[test]
fn test_client_add_rejects_invalid_email() {
    let db_path = setup_test_db("client_bad_email");
    init_db(&db_path);

    ttr()
        .args([
            "--db",
            &db_path,
            "client",
            "add",
            "--company",
            "Acme",
            "--name",
            "Jane Doe",
            "--email",
            "not-an-email",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid email address"));
}

#[test]
fn test_client_add_rejects_invalid_timezone() {
    let db_path = setup_test_db("client_bad_tz");
    init_db(&db_path);

    ttr()
        .args([
            "--db",
            &db_path,
            "client",
            "add",
            "--company",
            "Acme",
            "--name",
            "Jane Doe",
            "--tz",
            "+99:99",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid timezone"));
}

#[test]
fn test_client_add_accepts_offset_timezone() {
    let db_path = setup_test_db("client_offset_tz");
    init_db(&db_path);

    ttr()
        .args([
            "--db",
            &db_path,
            "client",
            "add",
            "--company",
            "XYZ Ltd",
            "--name",
            "Jane Smith",
            "--email",
            "jane.smith@xyzltd.com",
            "--phone",
            "0612345678",
            "--tz",
            "+02:00",
        ])
        .assert()
        .success();

    ttr()
        .args(["--db", &db_path, "client", "list"])
        .assert()
        .success()
        .stdout(contains("+02:00"));
}
