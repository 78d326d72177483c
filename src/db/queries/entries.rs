use crate::errors::AppResult;
use crate::models::project_entry::ProjectEntry;
use crate::models::task_entry::TaskEntry;
use rusqlite::{Connection, Result, Row, params};

fn map_task_entry(row: &Row) -> Result<TaskEntry> {
    Ok(TaskEntry {
        id: row.get("id")?,
        task_id: row.get("task_id")?,
        duration_min: row.get("duration_min")?,
        created_at: row.get("created_at")?,
    })
}

fn map_project_entry(row: &Row) -> Result<ProjectEntry> {
    Ok(ProjectEntry {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        duration_min: row.get("duration_min")?,
        billable: row.get::<_, i32>("billable")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_task_entry(conn: &Connection, entry: &TaskEntry) -> AppResult<TaskEntry> {
    conn.execute(
        "INSERT INTO task_entries (task_id, duration_min, created_at)
         VALUES (?1, ?2, ?3)",
        params![entry.task_id, entry.duration_min, entry.created_at],
    )?;

    let mut stored = entry.clone();
    stored.id = conn.last_insert_rowid() as i32;
    Ok(stored)
}

pub fn insert_project_entry(conn: &Connection, entry: &ProjectEntry) -> AppResult<ProjectEntry> {
    conn.execute(
        "INSERT INTO project_entries (project_id, duration_min, billable, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            entry.project_id,
            entry.duration_min,
            if entry.billable { 1 } else { 0 },
            entry.created_at,
        ],
    )?;

    let mut stored = entry.clone();
    stored.id = conn.last_insert_rowid() as i32;
    Ok(stored)
}

/// Entries for one task, newest first.
pub fn task_entries(conn: &Connection, task_id: i32) -> AppResult<Vec<TaskEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM task_entries WHERE task_id = ?1 ORDER BY created_at DESC",
    )?;

    let rows = stmt.query_map([task_id], map_task_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries for one project, newest first.
pub fn project_entries(conn: &Connection, project_id: i32) -> AppResult<Vec<ProjectEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM project_entries WHERE project_id = ?1 ORDER BY created_at DESC",
    )?;

    let rows = stmt.query_map([project_id], map_project_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn all_task_entries(conn: &Connection) -> AppResult<Vec<TaskEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM task_entries ORDER BY created_at DESC")?;

    let rows = stmt.query_map([], map_task_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn all_project_entries(conn: &Connection) -> AppResult<Vec<ProjectEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM project_entries ORDER BY created_at DESC")?;

    let rows = stmt.query_map([], map_project_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Total minutes logged against a task.
pub fn task_total_min(conn: &Connection, task_id: i32) -> AppResult<i64> {
    let total: i64 = conn.query_row(
        "SELECT IFNULL(SUM(duration_min), 0) FROM task_entries WHERE task_id = ?1",
        [task_id],
        |row| row.get(0),
    )?;
    Ok(total)
}

pub fn delete_task_entry(conn: &Connection, id: i32) -> AppResult<()> {
    conn.execute("DELETE FROM task_entries WHERE id = ?1", [id])?;
    Ok(())
}

pub fn delete_project_entry(conn: &Connection, id: i32) -> AppResult<()> {
    conn.execute("DELETE FROM project_entries WHERE id = ?1", [id])?;
    Ok(())
}
