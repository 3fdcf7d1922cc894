//! Transform errors
//!
//! Only output-side failures surface as errors. Input files that cannot
//! be read are skipped and reported, not raised.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

/// Transform errors
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("No input files to transform")]
    NoInputFiles,

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl TransformError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TransformError::Io {
            path: path.into(),
            source,
        }
    }
}
