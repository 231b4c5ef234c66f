//! Contact CRUD integration tests

use contax::app::{contact_create, contact_get, contact_list, ContactCreateReq};
use contax::infra::db::init_test_db;

// ──────────────────────── Helper ────────────────────────

fn make_create_req(name: &str) -> ContactCreateReq {
    ContactCreateReq {
        name: name.to_string(),
        email: Some(format!("{}@test.com", name.to_lowercase())),
        phone: Some("555-0100".to_string()),
        company: Some("Acme".to_string()),
        tags: Some("lead,vip".to_string()),
    }
}

// ══════════════════════════════════════════════════════════
//  contact_create
// ══════════════════════════════════════════════════════════

#[test]
fn create_contact_returns_dto_with_correct_fields() {
    let pool = init_test_db();
    let dto = contact_create(&pool, make_create_req("Alice")).unwrap();
    assert_eq!(dto.name, "Alice");
    assert_eq!(dto.email, "alice@test.com");
    assert_eq!(dto.phone, "555-0100");
    assert_eq!(dto.company, "Acme");
    assert_eq!(dto.tags, "lead,vip");
    assert!(dto.id > 0);
    assert!(!dto.created_at.is_empty());
}

#[test]
fn create_contact_defaults_optional_fields() {
    let pool = init_test_db();
    let dto = contact_create(
        &pool,
        ContactCreateReq {
            name: "Bob".to_string(),
            email: None,
            phone: None,
            company: None,
            tags: None,
        },
    )
    .unwrap();
    assert_eq!(dto.email, "");
    assert_eq!(dto.phone, "");
    assert_eq!(dto.company, "");
    assert_eq!(dto.tags, "");
}

#[test]
fn create_contact_stamps_created_at_at_call_time() {
    let pool = init_test_db();
    let dto = contact_create(&pool, make_create_req("Carol")).unwrap();
    // YYYY-MM-DD HH:MM:SS
    assert_eq!(dto.created_at.len(), 19);

    // The stored row carries the same stamp, not a later one.
    let fetched = contact_get(&pool, dto.id).unwrap();
    assert_eq!(fetched.created_at, dto.created_at);
}

#[test]
fn identities_are_unique_and_monotonic() {
    let pool = init_test_db();
    let a = contact_create(&pool, make_create_req("A")).unwrap();
    let b = contact_create(&pool, make_create_req("B")).unwrap();
    let c = contact_create(&pool, make_create_req("C")).unwrap();
    assert!(a.id < b.id);
    assert!(b.id < c.id);
}

// ══════════════════════════════════════════════════════════
//  contact_list
// ══════════════════════════════════════════════════════════

#[test]
fn list_returns_every_created_contact() {
    let pool = init_test_db();
    for i in 0..5 {
        contact_create(&pool, make_create_req(&format!("Contact{}", i))).unwrap();
    }
    let all = contact_list(&pool, None).unwrap();
    assert_eq!(all.len(), 5);
}

#[test]
fn list_preserves_insertion_order() {
    let pool = init_test_db();
    contact_create(&pool, make_create_req("Zed")).unwrap();
    contact_create(&pool, make_create_req("Amy")).unwrap();
    contact_create(&pool, make_create_req("Mia")).unwrap();

    let names: Vec<String> = contact_list(&pool, None)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Zed", "Amy", "Mia"]);
}

#[test]
fn list_filter_is_case_insensitive_substring() {
    let pool = init_test_db();
    contact_create(&pool, make_create_req("Alice Johnson")).unwrap();
    contact_create(&pool, make_create_req("Bob Stone")).unwrap();
    contact_create(&pool, make_create_req("alison Gray")).unwrap();

    let hits = contact_list(&pool, Some("ALI")).unwrap();
    let names: Vec<String> = hits.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Alice Johnson", "alison Gray"]);
}

#[test]
fn list_empty_filter_returns_all_rows() {
    let pool = init_test_db();
    contact_create(&pool, make_create_req("Alice")).unwrap();
    contact_create(&pool, make_create_req("Bob")).unwrap();

    assert_eq!(contact_list(&pool, Some("")).unwrap().len(), 2);
    assert_eq!(contact_list(&pool, None).unwrap().len(), 2);
}

#[test]
fn list_filter_with_no_match_returns_empty() {
    let pool = init_test_db();
    contact_create(&pool, make_create_req("Alice")).unwrap();
    assert!(contact_list(&pool, Some("zzz")).unwrap().is_empty());
}

#[test]
fn empty_name_never_matches_a_non_empty_filter() {
    let pool = init_test_db();
    contact_create(
        &pool,
        ContactCreateReq {
            name: String::new(),
            email: None,
            phone: None,
            company: None,
            tags: None,
        },
    )
    .unwrap();

    assert!(contact_list(&pool, Some("a")).unwrap().is_empty());
    // ...but the row is still there without a filter.
    assert_eq!(contact_list(&pool, None).unwrap().len(), 1);
}

// ══════════════════════════════════════════════════════════
//  contact_get
// ══════════════════════════════════════════════════════════

#[test]
fn get_contact_by_id() {
    let pool = init_test_db();
    let created = contact_create(&pool, make_create_req("Dave")).unwrap();
    let fetched = contact_get(&pool, created.id).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Dave");
}

#[test]
fn get_contact_not_found() {
    let pool = init_test_db();
    let err = contact_get(&pool, 9999);
    assert!(err.is_err());
    assert_eq!(err.unwrap_err().code(), "NOT_FOUND");
}
