//! Export of stored submissions

mod csv;
mod errors;

pub use self::csv::{to_csv, HEADINGS};
pub use errors::{ExportError, ExportResult};

/// Download file name for CSV exports
pub const CSV_FILE_NAME: &str = "submissions.csv";
