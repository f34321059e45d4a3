//! Configuration file
//!
//! ```json
//! {
//!   "data_file": "db.json",
//!   "schema_file": null,
//!   "http": { "host": "0.0.0.0", "port": 4000, "cors_origins": [] }
//! }
//! ```
//!
//! Every key is optional. A missing config file means all defaults.
//! The `PORT` environment variable overrides `http.port`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;

/// Environment variable that overrides the listen port
pub const PORT_ENV: &str = "PORT";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON data file holding submissions (default "db.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Form schema file; the built-in schema is used when absent
    #[serde(default)]
    pub schema_file: Option<PathBuf>,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("db.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            schema_file: None,
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, applying the `PORT` override
    pub fn load(path: &Path) -> CliResult<Self> {
        let mut config = Self::load_file(path)?;
        config.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())?;
        Ok(config)
    }

    /// Load configuration from file only
    pub fn load_file(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Replace the port when an override is present
    pub fn apply_port_override(&mut self, value: Option<&str>) -> CliResult<()> {
        if let Some(raw) = value {
            let port = raw.trim().parse::<u16>().map_err(|_| {
                CliError::config_error(format!("Invalid {} value: '{}'", PORT_ENV, raw))
            })?;
            self.http.port = port;
        }
        Ok(())
    }

    /// Write this configuration as pretty JSON
    pub fn write(&self, path: &Path) -> CliResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| CliError::config_error(format!("Failed to write config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_file(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.http.port, 4000);
        assert_eq!(config.data_file, PathBuf::from("db.json"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("formbase.json");
        fs::write(&path, r#"{ "http": { "port": 8080 } }"#).unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.host, "0.0.0.0");
        assert!(config.schema_file.is_none());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("formbase.json");
        fs::write(&path, "{ nope").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_port_override() {
        let mut config = Config::default();
        config.apply_port_override(Some("5050")).unwrap();
        assert_eq!(config.http.port, 5050);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.http.port, 5050);

        assert!(config.apply_port_override(Some("http")).is_err());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("formbase.json");
        let mut config = Config::default();
        config.schema_file = Some(PathBuf::from("form.json"));
        config.write(&path).unwrap();

        assert_eq!(Config::load_file(&path).unwrap(), config);
    }
}
