//! Submission record types
//!
//! The data file is a single JSON document:
//!
//! ```text
//! {
//!   "submissions": [ { "id", "createdAt", "data" }, ... ],   newest first
//!   "schema": { ... } | null                                  snapshot taken at creation
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{FormSchema, Payload};

/// One accepted submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Unique identifier
    pub id: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub created_at: String,
    /// The accepted payload, stored verbatim
    pub data: Payload,
}

impl SubmissionRecord {
    /// Creates a record with a fresh identifier stamped now.
    pub fn new(data: Payload) -> Self {
        Self::at(data, Utc::now())
    }

    /// Creates a record with a fresh identifier and a given timestamp.
    pub fn at(data: Payload, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            data,
        }
    }

    /// Parsed creation time. `None` if the stored text is not a timestamp.
    pub fn created_at_instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Whole-file document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub submissions: Vec<SubmissionRecord>,
    #[serde(default)]
    pub schema: Option<FormSchema>,
}
