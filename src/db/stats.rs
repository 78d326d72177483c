use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

/// Print a short information panel about the database file and its
/// contents.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let tables = [
        ("Clients", "clients"),
        ("Projects", "projects"),
        ("Tasks", "tasks"),
        ("Task entries", "task_entries"),
        ("Project entries", "project_entries"),
    ];

    for (label, table) in tables {
        let count: i64 = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        println!(
            "{}• {}:{} {}{}{}",
            CYAN, label, RESET, GREEN, count, RESET
        );
    }

    //
    // 3) TOTAL LOGGED TIME
    //
    let task_min: i64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(duration_min), 0) FROM task_entries",
        [],
        |row| row.get(0),
    )?;
    let project_min: i64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(duration_min), 0) FROM project_entries",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Logged time:{} {}",
        CYAN,
        RESET,
        crate::utils::mins2readable(task_min + project_min, false, false)
    );

    println!();
    Ok(())
}
