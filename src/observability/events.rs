//! Observable events
//!
//! Events are explicit and typed. Each maps to a stable upper-case name.

use std::fmt;

/// Observable events in a validate or build run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Run begins
    RunStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Schema registry ready
    SchemasLoaded,
    /// Input tables discovered
    InputsDiscovered,
    /// One table validated
    FileValidated,
    /// One table written as a document
    FileTransformed,
    /// One table skipped by the transformer
    FileSkipped,
    /// Manifest written
    ManifestWritten,
    /// Run finished over the full file set
    RunComplete,
    /// Run aborted before finishing (FATAL)
    RunAborted,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RunStart => "RUN_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemasLoaded => "SCHEMAS_LOADED",
            Event::InputsDiscovered => "INPUTS_DISCOVERED",
            Event::FileValidated => "FILE_VALIDATED",
            Event::FileTransformed => "FILE_TRANSFORMED",
            Event::FileSkipped => "FILE_SKIPPED",
            Event::ManifestWritten => "MANIFEST_WRITTEN",
            Event::RunComplete => "RUN_COMPLETE",
            Event::RunAborted => "RUN_ABORTED",
        }
    }

    /// Returns whether this event ends the run abnormally
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::RunAborted)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
