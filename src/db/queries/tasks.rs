use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        estimated_min: row.get("estimated_min")?,
        status_id: row.get("status_id")?,
        type_id: row.get("type_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn get_all(conn: &Connection) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare("SELECT * FROM tasks")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_by_project(conn: &Connection, project_id: i32) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare("SELECT * FROM tasks WHERE project_id = ?1 ORDER BY id ASC")?;

    let rows = stmt.query_map([project_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_by_id(conn: &Connection, id: i32) -> AppResult<Option<Task>> {
    let mut stmt = conn.prepare("SELECT * FROM tasks WHERE id = ?1")?;
    let task = stmt.query_row([id], map_row).optional()?;
    Ok(task)
}

pub fn insert(conn: &Connection, task: &Task) -> AppResult<Task> {
    conn.execute(
        "INSERT INTO tasks (project_id, name, description, estimated_min,
                            status_id, type_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            task.project_id,
            task.name,
            task.description,
            task.estimated_min,
            task.status_id,
            task.type_id,
            task.created_at,
        ],
    )?;

    let mut stored = task.clone();
    stored.id = conn.last_insert_rowid() as i32;
    Ok(stored)
}

/// Update a task (all fields except id)
pub fn update(conn: &Connection, task: &Task) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE tasks
         SET project_id = ?1, name = ?2, description = ?3,
             estimated_min = ?4, status_id = ?5, type_id = ?6,
             created_at = ?7
         WHERE id = ?8",
        params![
            task.project_id,
            task.name,
            task.description,
            task.estimated_min,
            task.status_id,
            task.type_id,
            task.created_at,
            task.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound("task", task.id));
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: i32) -> AppResult<()> {
    conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    Ok(())
}
