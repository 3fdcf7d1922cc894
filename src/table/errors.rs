//! Table input errors
//!
//! Two classes:
//! - whole-run fatal: the input directory is missing or holds no tables
//! - per-file: the file cannot be read or has no header row

use thiserror::Error;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Table input errors
#[derive(Debug, Error)]
pub enum TableError {
    #[error("{0} folder not found.")]
    InputDirMissing(String),

    #[error("No CSV files found in {0}.")]
    NoInputFiles(String),

    #[error("{file}: missing header row.")]
    MissingHeader { file: String },

    #[error("{file}: I/O error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}: unreadable CSV: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
}

impl TableError {
    /// Returns whether this error aborts the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(self, TableError::InputDirMissing(_) | TableError::NoInputFiles(_))
    }
}
