//! Opportunity use cases.

use crate::domain::Stage;
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::NaiveDate;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCreateReq {
    pub contact_id: i64,
    pub title: String,
    pub value: f64,
    pub stage: String,
    pub close_date: String,
}

#[derive(Debug, Serialize)]
pub struct OpportunityDto {
    pub id: i64,
    pub contact_name: String,
    pub title: String,
    pub value: f64,
    pub stage: String,
    pub close_date: String,
}

pub fn opportunity_create(
    pool: &DbPool,
    req: OpportunityCreateReq,
) -> Result<OpportunityDto, AppError> {
    if req.value < 0.0 {
        return Err(AppError::Validation("value must be non-negative".into()));
    }
    if NaiveDate::parse_from_str(&req.close_date, "%Y-%m-%d").is_err() {
        return Err(AppError::Validation(format!(
            "close_date must be an ISO date (YYYY-MM-DD), got `{}`",
            req.close_date
        )));
    }
    if Stage::from_str(&req.stage).is_none() {
        // Stage vocabulary is an input-surface concern; the store takes it as given.
        log::warn!("stage `{}` is outside the pipeline vocabulary", req.stage);
    }

    let conn = get_connection(pool);
    let contact_name: String = conn
        .query_row(
            "SELECT name FROM contacts WHERE id = ?1",
            params![req.contact_id],
            |r| r.get(0),
        )
        .map_err(|_| AppError::NotFound(format!("contact {}", req.contact_id)))?;

    conn.execute(
        "INSERT INTO opportunities (contact_id, title, value, stage, close_date) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![req.contact_id, req.title, req.value, req.stage, req.close_date],
    )
    .map_err(|e| AppError::Db(e.to_string()))?;
    let id = conn.last_insert_rowid();

    Ok(OpportunityDto {
        id,
        contact_name,
        title: req.title,
        value: req.value,
        stage: req.stage,
        close_date: req.close_date,
    })
}

/// Every opportunity joined with its contact's name. An opportunity whose
/// contact no longer resolves drops out of the join.
pub fn opportunity_list(pool: &DbPool) -> Result<Vec<OpportunityDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare(
            "SELECT o.id, c.name AS contact_name, o.title, o.value, o.stage, o.close_date
             FROM opportunities o
             JOIN contacts c ON o.contact_id = c.id",
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |row| {
        Ok(OpportunityDto {
            id: row.get(0)?,
            contact_name: row.get(1)?,
            title: row.get(2)?,
            value: row.get(3)?,
            stage: row.get(4)?,
            close_date: row.get(5)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}
