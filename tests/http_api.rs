//! HTTP API Tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use formbase::http_server::{AppState, HttpServer, HttpServerConfig};
use formbase::schema::employee_onboarding;
use formbase::storage::SubmissionStore;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (TempDir, Arc<AppState>) {
    let tmp = TempDir::new().unwrap();
    let schema = employee_onboarding();
    let store = SubmissionStore::open(tmp.path().join("db.json"), &schema).unwrap();
    (tmp, Arc::new(AppState::new(schema, store)))
}

fn app(state: &Arc<AppState>) -> Router {
    HttpServer::with_state(HttpServerConfig::default(), state.clone()).router()
}

fn valid_payload() -> Value {
    json!({
        "firstName": "Jo",
        "lastName": "Doe",
        "age": 30,
        "startDate": "2021-01-01",
        "role": "Developer"
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// =============================================================================
// Submit
// =============================================================================

#[tokio::test]
async fn test_valid_submission_created() {
    let (_tmp, state) = setup();

    let response = app(&state)
        .oneshot(post_json("/api/submissions", &valid_payload()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["createdAt"].as_str().is_some());
    assert_eq!(state.submission_count().unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_submission_rejected_and_not_stored() {
    let (_tmp, state) = setup();
    let mut payload = valid_payload();
    payload["age"] = json!(15);
    payload["firstName"] = json!("");

    let response = app(&state)
        .oneshot(post_json("/api/submissions", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["age"], "Minimum value is 18");
    assert_eq!(body["errors"]["firstName"], "This field is required.");
    assert_eq!(state.submission_count().unwrap(), 0);
}

#[tokio::test]
async fn test_non_object_body_treated_as_empty() {
    let (_tmp, state) = setup();

    let response = app(&state)
        .oneshot(post_json("/api/submissions", &json!("hello")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errors"]["role"], "This field is required.");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_all_persisted() {
    let (tmp, state) = setup();

    let mut handles = Vec::new();
    for i in 0..20 {
        let router = app(&state);
        let mut payload = valid_payload();
        payload["lastName"] = json!(format!("Doe{}", i));
        handles.push(tokio::spawn(async move {
            router
                .oneshot(post_json("/api/submissions", &payload))
                .await
                .unwrap()
                .status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    assert_eq!(state.submission_count().unwrap(), 20);
    let reopened =
        SubmissionStore::open(tmp.path().join("db.json"), &employee_onboarding()).unwrap();
    assert_eq!(reopened.len(), 20);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_pagination() {
    let (_tmp, state) = setup();
    for _ in 0..3 {
        let response = app(&state)
            .oneshot(post_json("/api/submissions", &valid_payload()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app(&state)
        .oneshot(get("/api/submissions?page=2&limit=2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["data"]["firstName"], "Jo");
}

#[tokio::test]
async fn test_list_defaults_on_garbage_params() {
    let (_tmp, state) = setup();

    let response = app(&state)
        .oneshot(get("/api/submissions?page=abc&limit=-4&sortOrder=sideways"))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["totalPages"], 1);
    assert!(body["items"].as_array().unwrap().is_empty());
}

// =============================================================================
// Export
// =============================================================================

#[tokio::test]
async fn test_export_csv_attachment() {
    let (_tmp, state) = setup();
    app(&state)
        .oneshot(post_json("/api/submissions", &valid_payload()))
        .await
        .unwrap();

    let response = app(&state)
        .oneshot(get("/api/submissions/export"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/csv"));
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("submissions.csv"));

    let csv = String::from_utf8(body_bytes(response).await).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ID,Created At,Data");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("\"\"firstName\"\":\"\"Jo\"\""));
}

// =============================================================================
// Schema and Health
// =============================================================================

#[tokio::test]
async fn test_form_schema_matches_builtin() {
    let (_tmp, state) = setup();

    let response = app(&state).oneshot(get("/api/form-schema")).await.unwrap();

    let body = body_json(response).await;
    let expected = serde_json::to_value(employee_onboarding()).unwrap();
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_health_endpoints() {
    let (_tmp, state) = setup();

    let response = app(&state).oneshot(get("/api/health")).await.unwrap();
    assert_eq!(body_json(response).await, json!({ "ok": true }));

    let response = app(&state).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
