//! Contact use cases.

use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreateReq {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub tags: String,
    pub created_at: String,
}

pub fn contact_create(pool: &DbPool, req: ContactCreateReq) -> Result<ContactDto, AppError> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let email = req.email.unwrap_or_default();
    let phone = req.phone.unwrap_or_default();
    let company = req.company.unwrap_or_default();
    let tags = req.tags.unwrap_or_default();

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO contacts (name, email, phone, company, tags, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![req.name, email, phone, company, tags, &now],
    )
    .map_err(|e| AppError::Db(e.to_string()))?;
    let id = conn.last_insert_rowid();

    Ok(ContactDto {
        id,
        name: req.name,
        email,
        phone,
        company,
        tags,
        created_at: now,
    })
}

/// All contacts in store order, optionally narrowed by a case-insensitive
/// substring match on name. Filtering happens on the read side: the store
/// always returns every row.
pub fn contact_list(pool: &DbPool, name_filter: Option<&str>) -> Result<Vec<ContactDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare("SELECT id, name, email, phone, company, tags, created_at FROM contacts")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |row| {
        Ok(ContactDto {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            company: row.get(4)?,
            tags: row.get(5)?,
            created_at: row.get(6)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }

    if let Some(filter) = name_filter {
        if !filter.is_empty() {
            let needle = filter.to_lowercase();
            out.retain(|c| c.name.to_lowercase().contains(&needle));
        }
    }
    Ok(out)
}

pub fn contact_get(pool: &DbPool, id: i64) -> Result<ContactDto, AppError> {
    let conn = get_connection(pool);
    conn.query_row(
        "SELECT id, name, email, phone, company, tags, created_at FROM contacts WHERE id = ?1",
        params![id],
        |row| {
            Ok(ContactDto {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                company: row.get(4)?,
                tags: row.get(5)?,
                created_at: row.get(6)?,
            })
        },
    )
    .map_err(|_| AppError::NotFound(format!("contact {}", id)))
}
