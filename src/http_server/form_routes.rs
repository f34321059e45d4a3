//! Form schema route

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::state::AppState;
use crate::schema::FormSchema;

/// Create form routes
pub fn form_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/form-schema", get(get_schema_handler))
        .with_state(state)
}

async fn get_schema_handler(State(state): State<Arc<AppState>>) -> Json<FormSchema> {
    Json(state.schema().clone())
}
