//! Submission Store Persistence Tests
//!
//! - Accepted submissions survive reopening the data file
//! - The data file keeps the `{ submissions, schema }` document shape
//! - Listing pages, caps, and sorts over stored records

use std::fs;

use chrono::{TimeZone, Utc};
use formbase::schema::{employee_onboarding, Payload};
use formbase::storage::{
    paginate, ListQuery, PageRequest, SortOrder, StorageError, SubmissionRecord, SubmissionStore,
    MAX_LIMIT,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

fn query(page: &str, limit: &str, order: Option<&str>) -> PageRequest {
    ListQuery {
        page: Some(page.to_string()),
        limit: Some(limit.to_string()),
        sort_by: None,
        sort_order: order.map(str::to_string),
    }
    .normalize()
}

// =============================================================================
// Durability
// =============================================================================

#[test]
fn test_submissions_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("db.json");
    let schema = employee_onboarding();

    let (first_id, second_id) = {
        let mut store = SubmissionStore::open(&path, &schema).unwrap();
        let first = store.append(payload(json!({ "firstName": "Ada" }))).unwrap();
        let second = store.append(payload(json!({ "firstName": "Grace" }))).unwrap();
        (first.id, second.id)
    };

    let store = SubmissionStore::open(&path, &schema).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].id, second_id);
    assert_eq!(store.all()[1].id, first_id);
    assert_eq!(store.all()[0].data["firstName"], "Grace");
}

#[test]
fn test_data_file_document_shape() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("db.json");
    let schema = employee_onboarding();

    let mut store = SubmissionStore::open(&path, &schema).unwrap();
    let record = store.append(payload(json!({ "age": 30 }))).unwrap();

    let document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(document["submissions"][0]["id"], record.id.as_str());
    assert_eq!(document["submissions"][0]["createdAt"], record.created_at.as_str());
    assert_eq!(document["submissions"][0]["data"]["age"], 30);
    assert_eq!(document["schema"]["title"], schema.title.as_str());
}

#[test]
fn test_ids_are_unique() {
    let tmp = TempDir::new().unwrap();
    let schema = employee_onboarding();
    let mut store = SubmissionStore::open(tmp.path().join("db.json"), &schema).unwrap();

    let mut ids = std::collections::HashSet::new();
    for i in 0..50 {
        let record = store.append(payload(json!({ "n": i }))).unwrap();
        assert!(ids.insert(record.id));
    }
}

#[test]
fn test_created_at_is_utc_millis() {
    let tmp = TempDir::new().unwrap();
    let schema = employee_onboarding();
    let mut store = SubmissionStore::open(tmp.path().join("db.json"), &schema).unwrap();

    let record = store.append(Payload::new()).unwrap();
    assert!(record.created_at.ends_with('Z'));
    assert_eq!(record.created_at.len(), "2024-01-01T00:00:00.000Z".len());
    assert!(record.created_at_instant().is_some());
}

#[test]
fn test_legacy_file_without_schema_gets_snapshot() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("db.json");
    fs::write(&path, r#"{ "submissions": [] }"#).unwrap();

    let store = SubmissionStore::open(&path, &employee_onboarding()).unwrap();
    assert!(store.schema_snapshot().is_some());

    let document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(document["schema"].is_object());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("db.json");
    fs::write(&path, "[1, 2").unwrap();

    let err = SubmissionStore::open(&path, &employee_onboarding()).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
    assert_eq!(err.status_code(), 500);
}

// =============================================================================
// Listing
// =============================================================================

fn dated_records(count: u32) -> Vec<SubmissionRecord> {
    // newest first, as stored
    (0..count)
        .rev()
        .map(|day| {
            let at = Utc.with_ymd_and_hms(2024, 1, 1 + day, 12, 0, 0).unwrap();
            SubmissionRecord::at(payload(json!({ "day": day })), at)
        })
        .collect()
}

#[test]
fn test_pages_partition_records() {
    let records = dated_records(25);

    let first = paginate(&records, &query("1", "10", None));
    let third = paginate(&records, &query("3", "10", None));
    let beyond = paginate(&records, &query("4", "10", None));

    assert_eq!(first.total, 25);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 10);
    assert_eq!(third.items.len(), 5);
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_pages, 3);
}

#[test]
fn test_sort_order() {
    let records = dated_records(5);

    let desc = paginate(&records, &query("1", "10", Some("desc")));
    let asc = paginate(&records, &query("1", "10", Some("asc")));

    assert_eq!(desc.items[0].data["day"], 4);
    assert_eq!(asc.items[0].data["day"], 0);
    assert_eq!(asc.items[4].data["day"], 4);
}

#[test]
fn test_limit_capped() {
    let records = dated_records(3);
    let page = paginate(&records, &query("1", "1000", None));
    assert_eq!(page.limit, MAX_LIMIT);
}

#[test]
fn test_empty_store_has_one_page() {
    let page = paginate(&[], &PageRequest::new(1, 10, SortOrder::Desc));
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn test_store_list_uses_stored_records() {
    let tmp = TempDir::new().unwrap();
    let schema = employee_onboarding();
    let mut store = SubmissionStore::open(tmp.path().join("db.json"), &schema).unwrap();
    for i in 0..3 {
        store.append(payload(json!({ "n": i }))).unwrap();
    }

    let page = store.list(&PageRequest::new(1, 2, SortOrder::Desc));
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 2);
}
