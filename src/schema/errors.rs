//! Schema registry errors
//!
//! Registry lookups never fail. Errors only arise when a registry
//! document is loaded from disk.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema registry errors
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema file '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed schema file '{path}': {reason}")]
    Malformed { path: String, reason: String },
}

impl SchemaError {
    /// Create a malformed schema error
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = SchemaError::malformed("tables.json", "expected object");
        let display = err.to_string();
        assert!(display.contains("tables.json"));
        assert!(display.contains("expected object"));
    }
}
