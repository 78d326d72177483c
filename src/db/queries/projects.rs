use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Project> {
    let deadline_str: String = row.get("deadline")?;
    let deadline = NaiveDate::parse_from_str(&deadline_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(deadline_str.clone())),
        )
    })?;

    Ok(Project {
        id: row.get("id")?,
        client_id: row.get("client_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        estimated_min: row.get("estimated_min")?,
        hourly_rate: row.get("hourly_rate")?,
        fixed_price: row.get("fixed_price")?,
        created_at: row.get("created_at")?,
        deadline,
    })
}

pub fn get_all(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare("SELECT * FROM projects")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Projects belonging to one client, oldest first.
pub fn get_by_client(conn: &Connection, client_id: i32) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare("SELECT * FROM projects WHERE client_id = ?1 ORDER BY id ASC")?;

    let rows = stmt.query_map([client_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_by_id(conn: &Connection, id: i32) -> AppResult<Option<Project>> {
    let mut stmt = conn.prepare("SELECT * FROM projects WHERE id = ?1")?;
    let project = stmt.query_row([id], map_row).optional()?;
    Ok(project)
}

pub fn insert(conn: &Connection, project: &Project) -> AppResult<Project> {
    conn.execute(
        "INSERT INTO projects (client_id, name, description, estimated_min,
                               hourly_rate, fixed_price, created_at, deadline)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            project.client_id,
            project.name,
            project.description,
            project.estimated_min,
            project.hourly_rate,
            project.fixed_price,
            project.created_at,
            project.deadline_str(),
        ],
    )?;

    let mut stored = project.clone();
    stored.id = conn.last_insert_rowid() as i32;
    Ok(stored)
}

/// Update a project (all fields except id)
pub fn update(conn: &Connection, project: &Project) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE projects
         SET client_id = ?1, name = ?2, description = ?3,
             estimated_min = ?4, hourly_rate = ?5, fixed_price = ?6,
             created_at = ?7, deadline = ?8
         WHERE id = ?9",
        params![
            project.client_id,
            project.name,
            project.description,
            project.estimated_min,
            project.hourly_rate,
            project.fixed_price,
            project.created_at,
            project.deadline_str(),
            project.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound("project", project.id));
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: i32) -> AppResult<()> {
    conn.execute("DELETE FROM projects WHERE id = ?1", [id])?;
    Ok(())
}
