//! CSV export / import for the Settings surface.
//!
//! Dialect: fields containing commas, quotes, or newlines are double-quoted,
//! embedded quotes escaped as `""`. One record per line.

use crate::error::AppError;
use crate::infra::DbPool;
use serde::Serialize;

use super::{contact_create, contact_list, opportunity_list, ContactCreateReq};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactImportReport {
    pub created: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

const CONTACT_EXPORT_HEADER: &str = "id,name,email,phone,company,tags,created_at";
const OPPORTUNITY_EXPORT_HEADER: &str = "id,contact_name,title,value,stage,close_date";

/// All contacts as CSV, header row first, rows in listing order.
pub fn export_contacts_csv(pool: &DbPool) -> Result<String, AppError> {
    let mut csv = String::from(CONTACT_EXPORT_HEADER);
    csv.push('\n');
    for c in contact_list(pool, None)? {
        let fields = [
            c.id.to_string(),
            c.name,
            c.email,
            c.phone,
            c.company,
            c.tags,
            c.created_at,
        ];
        csv.push_str(&to_csv_record(&fields));
        csv.push('\n');
    }
    Ok(csv)
}

/// All opportunities (joined with contact names) as CSV.
pub fn export_opportunities_csv(pool: &DbPool) -> Result<String, AppError> {
    let mut csv = String::from(OPPORTUNITY_EXPORT_HEADER);
    csv.push('\n');
    for o in opportunity_list(pool)? {
        let fields = [
            o.id.to_string(),
            o.contact_name,
            o.title,
            o.value.to_string(),
            o.stage,
            o.close_date,
        ];
        csv.push_str(&to_csv_record(&fields));
        csv.push('\n');
    }
    Ok(csv)
}

/// Import contacts from CSV text. The header must carry a `name` column;
/// `email`, `phone`, `company`, and `tags` are passed through when present
/// and default to empty otherwise. Every data row is an independent insert:
/// import is additive, and a bad row is reported without touching the rows
/// around it.
pub fn import_contacts_csv(pool: &DbPool, csv: &str) -> Result<ContactImportReport, AppError> {
    let mut lines = csv.lines();
    let header = lines
        .next()
        .ok_or_else(|| AppError::Validation("empty CSV input".into()))?;
    let columns: Vec<String> = split_csv_record(header)
        .into_iter()
        .map(|c| c.trim().to_lowercase())
        .collect();
    let name_idx = columns
        .iter()
        .position(|c| c == "name")
        .ok_or_else(|| AppError::Validation("CSV header must contain a `name` column".into()))?;
    let email_idx = columns.iter().position(|c| c == "email");
    let phone_idx = columns.iter().position(|c| c == "phone");
    let company_idx = columns.iter().position(|c| c == "company");
    let tags_idx = columns.iter().position(|c| c == "tags");

    let mut report = ContactImportReport {
        created: 0,
        skipped: 0,
        errors: Vec::new(),
    };

    for (line_no, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_record(line);
        if fields.len() <= name_idx {
            report.skipped += 1;
            report.errors.push(format!(
                "Row {}: no `name` field, got {} columns",
                line_no + 2,
                fields.len()
            ));
            continue;
        }
        let pick = |idx: Option<usize>| -> String {
            idx.and_then(|i| fields.get(i).cloned()).unwrap_or_default()
        };
        let req = ContactCreateReq {
            name: fields[name_idx].clone(),
            email: Some(pick(email_idx)),
            phone: Some(pick(phone_idx)),
            company: Some(pick(company_idx)),
            tags: Some(pick(tags_idx)),
        };
        match contact_create(pool, req) {
            Ok(_) => report.created += 1,
            Err(e) => {
                report.skipped += 1;
                report.errors.push(format!("Row {}: {}", line_no + 2, e));
            }
        }
    }

    log::info!(
        "contact import done: {} created, {} skipped",
        report.created,
        report.skipped
    );
    Ok(report)
}

fn to_csv_record(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn split_csv_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}
