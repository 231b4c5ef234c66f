//! Opportunity CSV export integration tests

use contax::app::{
    contact_create, export_opportunities_csv, opportunity_create, ContactCreateReq,
    OpportunityCreateReq,
};
use contax::infra::db::init_test_db;
use contax::infra::DbPool;

// ──────────────────────── Helpers ────────────────────────

fn seed_contact(pool: &DbPool, name: &str) -> i64 {
    contact_create(
        pool,
        ContactCreateReq {
            name: name.to_string(),
            email: None,
            phone: None,
            company: None,
            tags: None,
        },
    )
    .unwrap()
    .id
}

fn seed_opportunity(pool: &DbPool, contact_id: i64, title: &str, value: f64) {
    opportunity_create(
        pool,
        OpportunityCreateReq {
            contact_id,
            title: title.to_string(),
            value,
            stage: "Negotiation".to_string(),
            close_date: "2024-05-31".to_string(),
        },
    )
    .unwrap();
}

// ══════════════════════════════════════════════════════════
//  export_opportunities_csv
// ══════════════════════════════════════════════════════════

#[test]
fn export_empty_store_returns_header_only() {
    let pool = init_test_db();
    let csv = export_opportunities_csv(&pool).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "id,contact_name,title,value,stage,close_date");
}

#[test]
fn export_includes_joined_contact_name_and_iso_date() {
    let pool = init_test_db();
    let contact_id = seed_contact(&pool, "Acme Buyer");
    seed_opportunity(&pool, contact_id, "Renewal", 1250.5);

    let csv = export_opportunities_csv(&pool).unwrap();
    let data_line = csv.lines().nth(1).unwrap();
    assert!(data_line.contains("Acme Buyer"));
    assert!(data_line.contains("Renewal"));
    assert!(data_line.contains("1250.5"));
    assert!(data_line.contains("Negotiation"));
    assert!(data_line.contains("2024-05-31"));
}

#[test]
fn export_escapes_title_with_comma() {
    let pool = init_test_db();
    let contact_id = seed_contact(&pool, "Buyer");
    seed_opportunity(&pool, contact_id, "Hardware, installation and support", 10.0);

    let csv = export_opportunities_csv(&pool).unwrap();
    let data_line = csv.lines().nth(1).unwrap();
    assert!(data_line.contains("\"Hardware, installation and support\""));
}

#[test]
fn export_has_one_row_per_opportunity() {
    let pool = init_test_db();
    let contact_id = seed_contact(&pool, "Buyer");
    for i in 0..3 {
        seed_opportunity(&pool, contact_id, &format!("Deal {}", i), 100.0);
    }

    let csv = export_opportunities_csv(&pool).unwrap();
    assert_eq!(csv.lines().count(), 4); // header + 3 rows
}
