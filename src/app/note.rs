//! Note use cases: free-text annotations attached to a contact.

use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreateReq {
    pub contact_id: i64,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct NoteDto {
    pub id: i64,
    pub contact_id: i64,
    pub body: String,
    pub created_at: String,
}

pub fn note_create(pool: &DbPool, req: NoteCreateReq) -> Result<NoteDto, AppError> {
    let conn = get_connection(pool);
    let contact_exists: bool = conn
        .query_row(
            "SELECT 1 FROM contacts WHERE id = ?1",
            params![req.contact_id],
            |_| Ok(true),
        )
        .unwrap_or(false);
    if !contact_exists {
        return Err(AppError::NotFound(format!("contact {}", req.contact_id)));
    }

    let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    conn.execute(
        "INSERT INTO notes (contact_id, body, created_at) VALUES (?1, ?2, ?3)",
        params![req.contact_id, req.body, &now],
    )
    .map_err(|e| AppError::Db(e.to_string()))?;
    let id = conn.last_insert_rowid();

    Ok(NoteDto {
        id,
        contact_id: req.contact_id,
        body: req.body,
        created_at: now,
    })
}

pub fn note_list(pool: &DbPool, contact_id: i64) -> Result<Vec<NoteDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare("SELECT id, contact_id, body, created_at FROM notes WHERE contact_id = ?1")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map(params![contact_id], |row| {
        Ok(NoteDto {
            id: row.get(0)?,
            contact_id: row.get(1)?,
            body: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}
