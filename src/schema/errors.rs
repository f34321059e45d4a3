//! Schema loading error types
//!
//! Error codes:
//! - FORM_SCHEMA_UNREADABLE: schema file could not be read
//! - FORM_SCHEMA_MALFORMED: schema document is not valid schema JSON
//! - FORM_SCHEMA_INVALID: schema parsed but its structure is inconsistent
//!
//! These are startup failures. Payload problems are never reported through
//! this type; they are returned as a `ValidationResult`.

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// File missing or unreadable
    FormSchemaUnreadable,
    /// JSON does not describe a schema
    FormSchemaMalformed,
    /// Structure check failed
    FormSchemaInvalid,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::FormSchemaUnreadable => "FORM_SCHEMA_UNREADABLE",
            SchemaErrorCode::FormSchemaMalformed => "FORM_SCHEMA_MALFORMED",
            SchemaErrorCode::FormSchemaInvalid => "FORM_SCHEMA_INVALID",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with full context
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Source location if the schema came from a file
    path: Option<String>,
}

impl SchemaError {
    /// Create an unreadable schema file error
    pub fn unreadable(path: impl Into<String>, reason: impl fmt::Display) -> Self {
        let path = path.into();
        Self {
            code: SchemaErrorCode::FormSchemaUnreadable,
            message: format!("Failed to read schema file '{}': {}", path, reason),
            path: Some(path),
        }
    }

    /// Create a malformed schema error
    pub fn malformed(source: impl Into<String>, reason: impl fmt::Display) -> Self {
        let source = source.into();
        Self {
            code: SchemaErrorCode::FormSchemaMalformed,
            message: format!("Malformed schema '{}': {}", source, reason),
            path: Some(source),
        }
    }

    /// Create a structure check error
    pub fn invalid(source: impl Into<String>, reason: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            code: SchemaErrorCode::FormSchemaInvalid,
            message: format!("Invalid schema '{}': {}", source, reason.into()),
            path: Some(source),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the schema source if known
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
