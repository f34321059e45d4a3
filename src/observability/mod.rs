//! Observability for formbase
//!
//! Structured JSON-line logging keyed by typed lifecycle events.
//! Observability is read-only: it never changes request outcomes, and the
//! validator never logs.
//!
//! ```ignore
//! use formbase::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SubmissionAccepted, &[("id", &record.id)]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(default_severity(event), event.as_str(), fields);
}

fn default_severity(event: Event) -> Severity {
    match event {
        e if e.is_fatal() => Severity::Fatal,
        Event::StorageFailed => Severity::Error,
        Event::SubmissionRejected => Severity::Warn,
        Event::SubmissionsListed => Severity::Trace,
        _ => Severity::Info,
    }
}
