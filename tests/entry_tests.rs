use predicates::str::contains;

mod common;
use common::{add_client, add_project, init_db, setup_test_db, ttr};

fn setup_with_task(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    add_client(&db_path, "Acme", "Jane Doe", "jane@acme.com");
    add_project(&db_path, "Website redesign");

    ttr()
        .args([
            "--db", &db_path, "task", "add", "--project", "1", "--name", "Wireframes",
        ])
        .assert()
        .success();

    db_path
}

#[test]
fn test_entry_add_on_task_and_list() {
    let db_path = setup_with_task("entry_task");

    ttr()
        .args([
            "--db", &db_path, "entry", "add", "--task", "1", "--minutes", "90",
        ])
        .assert()
        .success()
        .stdout(contains("Logged 01h 30m on task #1"));

    ttr()
        .args(["--db", &db_path, "entry", "list", "--task", "1"])
        .assert()
        .success()
        .stdout(contains("01h 30m"));
}

#[test]
fn test_entry_totals_accumulate() {
    let db_path = setup_with_task("entry_totals");

    for _ in 0..2 {
        ttr()
            .args([
                "--db", &db_path, "entry", "add", "--task", "1", "--minutes", "45",
            ])
            .assert()
            .success();
    }

    ttr()
        .args([
            "--db", &db_path, "entry", "add", "--task", "1", "--minutes", "30",
        ])
        .assert()
        .success()
        .stdout(contains("02h 00m total"));
}

#[test]
fn test_entry_add_on_project_billable() {
    let db_path = setup_with_task("entry_project");

    ttr()
        .args([
            "--db",
            &db_path,
            "entry",
            "add",
            "--project",
            "1",
            "--minutes",
            "60",
            "--billable",
        ])
        .assert()
        .success()
        .stdout(contains("Logged 01h 00m on project #1 (billable)"));

    ttr()
        .args(["--db", &db_path, "entry", "list", "--project", "1"])
        .assert()
        .success()
        .stdout(contains("yes"));
}

#[test]
fn test_entry_add_requires_a_target() {
    let db_path = setup_with_task("entry_no_target");

    ttr()
        .args(["--db", &db_path, "entry", "add", "--minutes", "60"])
        .assert()
        .failure()
        .stderr(contains("specify exactly one of --task or --project"));
}

#[test]
fn test_entry_add_rejects_zero_minutes() {
    let db_path = setup_with_task("entry_zero");

    ttr()
        .args([
            "--db", &db_path, "entry", "add", "--task", "1", "--minutes", "0",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));
}

#[test]
fn test_entry_add_unknown_task_is_reported() {
    let db_path = setup_with_task("entry_unknown_task");

    ttr()
        .args([
            "--db", &db_path, "entry", "add", "--task", "7", "--minutes", "60",
        ])
        .assert()
        .failure()
        .stderr(contains("No task found with id 7"));
}
