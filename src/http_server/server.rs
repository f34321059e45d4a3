//! # HTTP Server
//!
//! Combines the form, submission, and health routers into one Axum app.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::config::HttpServerConfig;
use super::form_routes::form_routes;
use super::health_routes::{api_health_routes, health_routes};
use super::state::AppState;
use super::submission_routes::submission_routes;
use crate::observability::{log_event_with_fields, Event};

/// HTTP server for the form backend
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server bound to `config` serving `state`
    pub fn with_state(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let api = Router::new()
            .merge(form_routes(state.clone()))
            .merge(submission_routes(state))
            .merge(api_health_routes());

        Router::new()
            .merge(health_routes())
            .nest("/api", api)
            .layer(config.cors_layer())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", &bound)]);

        axum::serve(listener, self.router).await
    }
}
