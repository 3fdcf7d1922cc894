//! JSON document output
//!
//! Documents are pretty-printed (two-space indent), UTF-8, with a
//! trailing newline.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::errors::{TransformError, TransformResult};

/// Renders `value` as a document body.
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    Ok(body)
}

/// Writes `value` to `path`, replacing any previous document.
pub fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> TransformResult<()> {
    let body = to_document(value).map_err(|source| TransformError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body).map_err(|e| TransformError::io(path, e))
}
