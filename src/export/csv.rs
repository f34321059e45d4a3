//! CSV rendering of submission records
//!
//! Layout:
//!
//! ```text
//! ID,Created At,Data
//! <id>,<createdAt>,<data as compact JSON>
//! ```
//!
//! Quoting follows RFC 4180. Rows are separated by `\n` with no
//! trailing newline.

use super::errors::ExportResult;
use crate::storage::SubmissionRecord;

/// Column headings
pub const HEADINGS: [&str; 3] = ["ID", "Created At", "Data"];

/// Renders records as CSV. Empty input yields the heading row only.
pub fn to_csv(records: &[SubmissionRecord]) -> ExportResult<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADINGS)?;
    for record in records {
        let data = serde_json::to_string(&record.data)?;
        writer.write_record([record.id.as_str(), record.created_at.as_str(), data.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
