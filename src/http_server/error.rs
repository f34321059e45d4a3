//! # API Error
//!
//! Maps rejected submissions and storage failures to JSON responses.
//! Every error body carries `"success": false`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::schema::ValidationResult;
use crate::storage::StorageError;

/// Route-level error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed validation; the field map is returned verbatim.
    #[error("submission rejected: {} field(s) invalid", .0.len())]
    Rejected(ValidationResult),

    /// Data file could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Export artifact could not be rendered.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Blocking store work panicked or was cancelled.
    #[error("storage task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Export(_) | ApiError::TaskFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Rejected(errors) => json!({ "success": false, "errors": errors }),
            other => json!({ "success": false, "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
