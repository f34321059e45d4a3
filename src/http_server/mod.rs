//! # HTTP Server Module
//!
//! JSON API over the schema, the validator, and the submission store.
//!
//! # Endpoints
//!
//! - `/health` - Health check with crate version
//! - `/api/health` - Liveness check
//! - `/api/form-schema` - The active form schema
//! - `/api/submissions` - Submit (POST) and list (GET)
//! - `/api/submissions/export` - CSV export of one page

pub mod config;
mod error;
mod form_routes;
mod health_routes;
pub mod server;
mod state;
mod submission_routes;

pub use config::HttpServerConfig;
pub use error::ApiError;
pub use server::HttpServer;
pub use state::AppState;
pub use submission_routes::{ListResponse, SubmitResponse};
