//! Input discovery
//!
//! Both passes see the same inputs: every `*.csv` regular file directly
//! inside the input directory, sorted by file name.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{TableError, TableResult};

/// Table file extension
pub const TABLE_EXTENSION: &str = "csv";

/// Lists the table files in `dir`.
///
/// # Errors
///
/// - `InputDirMissing` if `dir` does not exist or is not a directory
/// - `NoInputFiles` if it holds no table files
/// - `Io` if the directory cannot be listed
pub fn discover_inputs(dir: &Path) -> TableResult<Vec<PathBuf>> {
    let dir_label = format!("{}/", dir.display());

    if !dir.is_dir() {
        return Err(TableError::InputDirMissing(dir_label));
    }

    let io_err = |source| TableError::Io {
        file: dir_label.clone(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == TABLE_EXTENSION) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(TableError::NoInputFiles(dir_label));
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
