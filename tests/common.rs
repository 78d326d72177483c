#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ttr() -> Command {
    cargo_bin_cmd!("ttracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ttracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema for a test database (uses --test so the user's
/// real config file is never touched)
pub fn init_db(db_path: &str) {
    ttr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a client via the CLI
pub fn add_client(db_path: &str, company: &str, name: &str, email: &str) {
    ttr()
        .args([
            "--db", db_path, "client", "add", "--company", company, "--name", name, "--email",
            email, "--phone", "555-0100", "--tz", "UTC",
        ])
        .assert()
        .success();
}

/// Add a project for client 1 via the CLI
pub fn add_project(db_path: &str, name: &str) {
    ttr()
        .args([
            "--db",
            db_path,
            "project",
            "add",
            "--client",
            "1",
            "--name",
            name,
            "--deadline",
            "2026-12-31",
        ])
        .assert()
        .success();
}

/// Open the test database directly through the library API
pub fn open_pool(db_path: &str) -> ttracker::db::pool::DbPool {
    let pool = ttracker::db::pool::DbPool::new(db_path).expect("open db");
    ttracker::db::initialize::init_db(&pool.conn).expect("init db");
    pool
}
