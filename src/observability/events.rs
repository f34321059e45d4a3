//! Observable events
//!
//! Every log line carries one of these as its `event` key.

use std::fmt;

/// Observable events in formbase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Form schema loaded
    SchemaLoaded,
    /// Data file opened
    StoreOpened,
    /// Server listening
    Serving,
    /// Startup failed (FATAL)
    StartupFailed,

    // Submissions
    /// Payload passed validation and was stored
    SubmissionAccepted,
    /// Payload failed validation
    SubmissionRejected,
    /// Submissions listed
    SubmissionsListed,
    /// CSV export produced
    ExportProduced,

    // Storage
    /// Data file read or write failed
    StorageFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::Serving => "FORMBASE_SERVING",
            Event::StartupFailed => "STARTUP_FAILED",
            Event::SubmissionAccepted => "SUBMISSION_ACCEPTED",
            Event::SubmissionRejected => "SUBMISSION_REJECTED",
            Event::SubmissionsListed => "SUBMISSIONS_LISTED",
            Event::ExportProduced => "EXPORT_PRODUCED",
            Event::StorageFailed => "STORAGE_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::StartupFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
