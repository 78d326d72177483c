use crate::errors::{AppError, AppResult};
use crate::models::client::Client;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Client> {
    Ok(Client {
        id: row.get("id")?,
        company: row.get("company")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone_number: row.get("phone_number")?,
        timezone: row.get("timezone")?,
    })
}

/// Every stored client. Order is whatever SQLite returns; callers that
/// need a stable order sort themselves.
pub fn get_all(conn: &Connection) -> AppResult<Vec<Client>> {
    let mut stmt = conn.prepare("SELECT * FROM clients")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_by_id(conn: &Connection, id: i32) -> AppResult<Option<Client>> {
    let mut stmt = conn.prepare("SELECT * FROM clients WHERE id = ?1")?;
    let client = stmt.query_row([id], map_row).optional()?;
    Ok(client)
}

/// Persist a new client row. The store assigns the id; the returned
/// value is the same client with the fresh id filled in.
pub fn insert(conn: &Connection, client: &Client) -> AppResult<Client> {
    conn.execute(
        "INSERT INTO clients (company, name, email, phone_number, timezone)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            client.company,
            client.name,
            client.email,
            client.phone_number,
            client.timezone,
        ],
    )?;

    let mut stored = client.clone();
    stored.id = conn.last_insert_rowid() as i32;
    Ok(stored)
}

/// Replace all fields of the row matching `client.id`.
/// Updating an id that does not exist is a reported miss, not a silent
/// success.
pub fn update(conn: &Connection, client: &Client) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE clients
         SET company = ?1, name = ?2, email = ?3,
             phone_number = ?4, timezone = ?5
         WHERE id = ?6",
        params![
            client.company,
            client.name,
            client.email,
            client.phone_number,
            client.timezone,
            client.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound("client", client.id));
    }
    Ok(())
}

/// Remove the row matching `id`. Deleting an absent id is a no-op.
pub fn delete(conn: &Connection, id: i32) -> AppResult<()> {
    conn.execute("DELETE FROM clients WHERE id = ?1", [id])?;
    Ok(())
}
