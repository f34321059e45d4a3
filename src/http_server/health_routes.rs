//! Liveness endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health` at the root, reporting the crate version
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// `GET /health` under `/api`, body `{ "ok": true }`
pub fn api_health_routes() -> Router {
    Router::new().route("/health", get(api_health_handler))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn api_health_handler() -> Json<Value> {
    Json(json!({ "ok": true }))
}
