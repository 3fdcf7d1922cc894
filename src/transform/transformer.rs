//! Table transformer
//!
//! Writes each table as `<out_dir>/<stem>.json` (an array of row objects)
//! and then `<out_dir>/manifest.json`. A table that cannot be read is
//! skipped; the batch continues.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::table::{file_id, read_table, Table};

use super::document::write_document;
use super::errors::{TransformError, TransformResult};
use super::manifest::Manifest;

/// Manifest document name
pub const MANIFEST_FILE: &str = "manifest.json";

/// Output document extension
pub const DOCUMENT_EXTENSION: &str = "json";

/// Derives the output document name: file stem plus `.json`.
pub fn output_name(file_id: &str) -> String {
    let stem = Path::new(file_id)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_id.to_string());
    format!("{}.{}", stem, DOCUMENT_EXTENSION)
}

/// A document written for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    pub file_id: String,
    pub path: PathBuf,
    pub rows: usize,
}

/// A table the transformer could not read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_id: String,
    pub reason: String,
}

/// Outcome of a full transform run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    pub written: Vec<WrittenDocument>,
    pub skipped: Vec<SkippedFile>,
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
}

impl TransformReport {
    /// True if every input table was written
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Writes progress lines: `Wrote <path> (<n> rows)` per document,
    /// `ERROR: <reason>` per skipped table, then `Wrote manifest.json`.
    pub fn render<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        for doc in &self.written {
            writeln!(out, "Wrote {} ({} rows)", doc.path.display(), doc.rows)?;
        }
        for skipped in &self.skipped {
            writeln!(err, "ERROR: {}", skipped.reason)?;
        }
        writeln!(out, "Wrote {}", MANIFEST_FILE)?;
        out.flush()?;
        err.flush()
    }
}

/// Converts tables into JSON documents under an output directory.
pub struct Transformer {
    out_dir: PathBuf,
}

impl Transformer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Transforms every file, then writes the manifest.
    ///
    /// # Errors
    ///
    /// - `NoInputFiles` if `paths` is empty (nothing is written)
    /// - `Io`/`Serialize` if an output document cannot be written
    pub fn run(&self, paths: &[PathBuf]) -> TransformResult<TransformReport> {
        if paths.is_empty() {
            return Err(TransformError::NoInputFiles);
        }

        fs::create_dir_all(&self.out_dir).map_err(|e| TransformError::io(&self.out_dir, e))?;

        let mut written = Vec::new();
        let mut skipped = Vec::new();
        let mut manifest = Manifest::new();

        for path in paths {
            match read_table(path) {
                Ok(table) => {
                    let doc = self.transform_table(&table)?;
                    manifest.record(&doc.file_id, doc.rows, output_name(&doc.file_id));
                    written.push(doc);
                }
                Err(e) => {
                    let id = file_id(path);
                    let reason = e.to_string();
                    Logger::warn(
                        Event::FileSkipped.as_str(),
                        &[("file", id.as_str()), ("reason", reason.as_str())],
                    );
                    skipped.push(SkippedFile { file_id: id, reason });
                }
            }
        }

        let manifest_path = self.out_dir.join(MANIFEST_FILE);
        manifest.write_to_file(&manifest_path)?;
        log_event_with_fields(
            Event::ManifestWritten,
            &[("entries", manifest.len().to_string().as_str())],
        );

        Ok(TransformReport {
            written,
            skipped,
            manifest,
            manifest_path,
        })
    }

    /// Writes one table's document.
    pub fn transform_table(&self, table: &Table) -> TransformResult<WrittenDocument> {
        let path = self.out_dir.join(output_name(&table.file_id));
        write_document(&path, &table.rows)?;

        let rows = table.rows.len().to_string();
        log_event_with_fields(
            Event::FileTransformed,
            &[("file", table.file_id.as_str()), ("rows", rows.as_str())],
        );

        Ok(WrittenDocument {
            file_id: table.file_id.clone(),
            path,
            rows: table.rows.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        fs::create_dir(&docs).unwrap();
        let paths = files
            .iter()
            .map(|(name, content)| {
                let path = docs.join(name);
                fs::write(&path, content).unwrap();
                path
            })
            .collect();
        (tmp, paths)
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name("shoot.csv"), "shoot.json");
        assert_eq!(output_name("psychic_powers.csv"), "psychic_powers.json");
        assert_eq!(output_name("odd.name.csv"), "odd.name.json");
    }

    #[test]
    fn test_run_writes_documents_and_manifest() {
        let (tmp, paths) = setup(&[("shoot.csv", "name,ap\nBolter,1\nPlasma,*\n")]);
        let out = tmp.path().join("site").join("data");

        let report = Transformer::new(&out).run(&paths).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.written[0].rows, 2);
        let entry = report.manifest.get("shoot.csv").unwrap();
        assert_eq!(entry.rows, 2);
        assert_eq!(entry.out, "shoot.json");
        assert!(out.join("shoot.json").exists());
        assert!(out.join(MANIFEST_FILE).exists());
    }

    #[test]
    fn test_headerless_file_skipped_batch_continues() {
        let (tmp, paths) = setup(&[("empty.csv", ""), ("rules.csv", "name,step\nA,1\n")]);
        let out = tmp.path().join("out");

        let report = Transformer::new(&out).run(&paths).unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.skipped[0].file_id, "empty.csv");
        assert!(report.manifest.get("empty.csv").is_none());
        assert_eq!(report.manifest.get("rules.csv").unwrap().rows, 1);
        assert!(!out.join("empty.json").exists());
    }

    #[test]
    fn test_no_inputs_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");

        let err = Transformer::new(&out).run(&[]).unwrap_err();
        assert!(matches!(err, TransformError::NoInputFiles));
        assert!(!out.exists());
    }

    #[test]
    fn test_render_progress_lines() {
        let (tmp, paths) = setup(&[("empty.csv", ""), ("rules.csv", "name\nA\n")]);
        let report = Transformer::new(tmp.path().join("out")).run(&paths).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        report.render(&mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();

        assert!(out.contains("rules.json (1 rows)\n"));
        assert!(out.ends_with("Wrote manifest.json\n"));
        assert_eq!(err, "ERROR: empty.csv: missing header row.\n");
    }
}
