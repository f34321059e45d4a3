//! Export Errors

use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

/// Failure while rendering an export artifact
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("record data could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
