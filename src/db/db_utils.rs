//! Database administration helpers: table listing, existence checks,
//! full reset.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Names of all user tables, in sqlite_master order.
pub fn list_tables(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type='table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// True when the database file exists on disk and already contains tables.
pub fn database_exists(db_path: &str) -> bool {
    if !Path::new(db_path).exists() {
        return false;
    }

    match Connection::open(db_path) {
        Ok(conn) => list_tables(&conn).map(|t| !t.is_empty()).unwrap_or(false),
        Err(_) => false,
    }
}

/// Drop every user table and rebuild the schema from scratch,
/// reseeding the lookup defaults.
pub fn reset_database(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = OFF;")?;

    for table in list_tables(conn)? {
        conn.execute_batch(&format!("DROP TABLE {};", table))?;
    }

    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    init_db(conn)?;
    Ok(())
}
