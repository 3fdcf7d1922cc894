//! Observability for validate and build runs
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle events
//!
//! Observability is read-only: it never changes a run's outcome.
//!
//! ```ignore
//! use tablecheck::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::FileValidated, &[("file", "shoot.csv")]);
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
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
