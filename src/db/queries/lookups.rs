//! Queries for the two lookup tables (task statuses and task types).
//! These rows are seeded at init time and referenced by label from the
//! CLI.

use crate::errors::AppResult;
use crate::models::task_status::TaskStatus;
use crate::models::task_type::TaskType;
use rusqlite::{Connection, OptionalExtension};

pub fn all_statuses(conn: &Connection) -> AppResult<Vec<TaskStatus>> {
    let mut stmt = conn.prepare("SELECT id, label FROM task_statuses ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(TaskStatus {
            id: row.get(0)?,
            label: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn all_types(conn: &Connection) -> AppResult<Vec<TaskType>> {
    let mut stmt = conn.prepare("SELECT id, label FROM task_types ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(TaskType {
            id: row.get(0)?,
            label: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Case-insensitive label lookup.
pub fn status_by_label(conn: &Connection, label: &str) -> AppResult<Option<TaskStatus>> {
    let mut stmt = conn.prepare(
        "SELECT id, label FROM task_statuses WHERE label = ?1 COLLATE NOCASE",
    )?;
    let status = stmt
        .query_row([label], |row| {
            Ok(TaskStatus {
                id: row.get(0)?,
                label: row.get(1)?,
            })
        })
        .optional()?;
    Ok(status)
}

pub fn type_by_label(conn: &Connection, label: &str) -> AppResult<Option<TaskType>> {
    let mut stmt =
        conn.prepare("SELECT id, label FROM task_types WHERE label = ?1 COLLATE NOCASE")?;
    let ty = stmt
        .query_row([label], |row| {
            Ok(TaskType {
                id: row.get(0)?,
                label: row.get(1)?,
            })
        })
        .optional()?;
    Ok(ty)
}

pub fn status_label(conn: &Connection, id: i32) -> AppResult<String> {
    let mut stmt = conn.prepare("SELECT label FROM task_statuses WHERE id = ?1")?;
    let label: Option<String> = stmt.query_row([id], |row| row.get(0)).optional()?;
    Ok(label.unwrap_or_else(|| "?".to_string()))
}

pub fn type_label(conn: &Connection, id: i32) -> AppResult<String> {
    let mut stmt = conn.prepare("SELECT label FROM task_types WHERE id = ?1")?;
    let label: Option<String> = stmt.query_row([id], |row| row.get(0)).optional()?;
    Ok(label.unwrap_or_else(|| "?".to_string()))
}
