//! Submission HTTP Routes
//!
//! Endpoints for submitting, listing, and exporting form submissions.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::state::AppState;
use crate::export::{to_csv, CSV_FILE_NAME};
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{validate, Payload};
use crate::storage::{ListQuery, StorageError, SubmissionPage};

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub id: String,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: SubmissionPage,
}

// ==================
// Submission Routes
// ==================

/// Create submission routes
pub fn submission_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/submissions", get(list_handler).post(submit_handler))
        .route("/submissions/export", get(export_handler))
        .with_state(state)
}

fn log_storage_failure(err: &StorageError) {
    let reason = err.to_string();
    log_event_with_fields(Event::StorageFailed, &[("reason", &reason)]);
}

// ==================
// Handlers
// ==================

/// Validates and stores a submission.
///
/// A body that is not a JSON object carries no field values and is
/// validated as an empty payload.
async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let payload = match body {
        Value::Object(map) => map,
        _ => Payload::new(),
    };

    let errors = validate(state.schema(), &payload);
    if !errors.is_valid() {
        let fields = errors.iter().map(|(name, _)| name).collect::<Vec<_>>().join(",");
        log_event_with_fields(Event::SubmissionRejected, &[("fields", &fields)]);
        return Err(ApiError::Rejected(errors));
    }

    // The store fsyncs on every append, so keep it off the async workers.
    let store_state = Arc::clone(&state);
    let record = tokio::task::spawn_blocking(move || store_state.append(payload))
        .await?
        .map_err(|e| {
            log_storage_failure(&e);
            ApiError::from(e)
        })?;

    log_event_with_fields(
        Event::SubmissionAccepted,
        &[("id", &record.id), ("created_at", &record.created_at)],
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            id: record.id,
            created_at: record.created_at,
        }),
    ))
}

async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    let request = query.normalize();
    let page = state.list(&request).map_err(|e| {
        log_storage_failure(&e);
        ApiError::from(e)
    })?;

    let page_text = page.page.to_string();
    let total_text = page.total.to_string();
    log_event_with_fields(
        Event::SubmissionsListed,
        &[("page", &page_text), ("total", &total_text)],
    );

    Ok(Json(ListResponse {
        success: true,
        page,
    }))
}

/// Exports the requested page as a CSV attachment.
async fn export_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let request = query.normalize();
    let page = state.list(&request).map_err(|e| {
        log_storage_failure(&e);
        ApiError::from(e)
    })?;

    let csv = to_csv(&page.items)?;
    let rows = page.items.len().to_string();
    log_event_with_fields(Event::ExportProduced, &[("rows", &rows)]);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
            ),
        ],
        csv,
    ))
}
