use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the full schema: clients, projects, tasks, the two lookup
/// tables and both time-entry tables.
///
/// Ids are AUTOINCREMENT so they are unique and never reused, even
/// after a row is deleted.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            company      TEXT NOT NULL,
            name         TEXT NOT NULL,
            email        TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            timezone     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS task_statuses (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS task_types (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS projects (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id     INTEGER NOT NULL REFERENCES clients(id),
            name          TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT '',
            estimated_min INTEGER NOT NULL DEFAULT 0,
            hourly_rate   REAL NOT NULL DEFAULT 0,
            fixed_price   REAL NOT NULL DEFAULT 0,
            created_at    TEXT NOT NULL,
            deadline      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id    INTEGER NOT NULL REFERENCES projects(id),
            name          TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT '',
            estimated_min INTEGER NOT NULL DEFAULT 0,
            status_id     INTEGER NOT NULL REFERENCES task_statuses(id),
            type_id       INTEGER NOT NULL REFERENCES task_types(id),
            created_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS task_entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id      INTEGER NOT NULL REFERENCES tasks(id),
            duration_min INTEGER NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS project_entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id   INTEGER NOT NULL REFERENCES projects(id),
            duration_min INTEGER NOT NULL,
            billable     INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_projects_client ON projects(client_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_project ON tasks(project_id);
        CREATE INDEX IF NOT EXISTS idx_task_entries_task ON task_entries(task_id);
        CREATE INDEX IF NOT EXISTS idx_project_entries_project ON project_entries(project_id);
        "#,
    )?;
    Ok(())
}

/// Default rows for the two lookup tables.
const DEFAULT_STATUSES: [&str; 4] = ["Not Started", "In Progress", "Completed", "On Hold"];
const DEFAULT_TYPES: [&str; 4] = ["Design", "Development", "Meeting", "Admin"];

/// Seed the lookup tables on first initialization. `INSERT OR IGNORE`
/// keeps the operation idempotent across repeated `init` runs.
fn seed_lookup_tables(conn: &Connection) -> Result<()> {
    let before: i64 =
        conn.query_row("SELECT COUNT(*) FROM task_statuses", [], |row| row.get(0))?;

    for label in DEFAULT_STATUSES {
        conn.execute(
            "INSERT OR IGNORE INTO task_statuses (label) VALUES (?1)",
            [label],
        )?;
    }
    for label in DEFAULT_TYPES {
        conn.execute(
            "INSERT OR IGNORE INTO task_types (label) VALUES (?1)",
            [label],
        )?;
    }

    if before == 0 {
        success("Seeded default task statuses and types.");
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create schema if missing
    let fresh = !table_exists(conn, "clients")?;
    create_schema(conn)?;

    if fresh {
        success("Created database schema.");
    }

    // 3) Seed lookup defaults
    seed_lookup_tables(conn)?;

    Ok(())
}
