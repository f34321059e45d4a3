//! CLI-specific error types
//!
//! Every CLI error ends the process with exit status 1.

use std::fmt;
use std::io;

use crate::export::ExportError;
use crate::schema::SchemaError;
use crate::storage::StorageError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout or output file)
    IoError,
    /// Schema could not be loaded
    SchemaError,
    /// Data file could not be read or written
    StorageError,
    /// Data file already exists
    AlreadyInitialized,
    /// Server failed to start or stopped with an error
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "FORMBASE_CLI_CONFIG_ERROR",
            Self::IoError => "FORMBASE_CLI_IO_ERROR",
            Self::SchemaError => "FORMBASE_CLI_SCHEMA_ERROR",
            Self::StorageError => "FORMBASE_CLI_STORAGE_ERROR",
            Self::AlreadyInitialized => "FORMBASE_CLI_ALREADY_INITIALIZED",
            Self::ServeFailed => "FORMBASE_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Data file already present
    pub fn already_initialized(path: &str) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Data file '{}' already exists", path),
        )
    }

    /// Server failure
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::new(CliErrorCode::SchemaError, e.to_string())
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::new(CliErrorCode::StorageError, e.to_string())
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        Self::io_error(format!("Export failed: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
