//! Listener and CORS settings for the form API
//!
//! Lives under the `http` key of the config file.

use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Bind address (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port (default: 4000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call the API. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// `host:port` as text
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS layer for the form frontend.
    ///
    /// Origins that are not valid header values are skipped.
    pub fn cors_layer(&self) -> CorsLayer {
        let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if self.cors_origins.is_empty() {
            return base.allow_origin(Any);
        }

        let origins: Vec<_> = self
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        base.allow_origin(AllowOrigin::list(origins))
    }
}
