//! Validation report and status lines
//!
//! Status stream format:
//! - `OK: <file>` on the success sink, once per file with no fail issue
//! - `ERROR: <issue>` / `WARNING: <issue>` on the issue sink

use std::io::{self, Write};

use super::issue::Issue;

/// Issues found in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub file_id: String,
    pub issues: Vec<Issue>,
}

impl FileOutcome {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            issues: Vec::new(),
        }
    }

    /// True if no fail-severity issue was raised for this file
    pub fn passed(&self) -> bool {
        !self.issues.iter().any(Issue::is_fail)
    }

    pub fn fail_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_fail()).count()
    }

    pub fn warn_count(&self) -> usize {
        self.issues.len() - self.fail_count()
    }
}

/// Result of validating the full file set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    files: Vec<FileOutcome>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    pub fn files(&self) -> &[FileOutcome] {
        &self.files
    }

    /// All issues, in file then discovery order
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.files.iter().flat_map(|f| f.issues.iter())
    }

    pub fn fail_count(&self) -> usize {
        self.files.iter().map(FileOutcome::fail_count).sum()
    }

    pub fn warn_count(&self) -> usize {
        self.files.iter().map(FileOutcome::warn_count).sum()
    }

    /// Success iff no fail-severity issue anywhere. Warnings never count.
    pub fn is_success(&self) -> bool {
        self.files.iter().all(FileOutcome::passed)
    }

    /// Writes status lines for every file.
    pub fn render<O: Write, E: Write>(&self, ok_sink: &mut O, issue_sink: &mut E) -> io::Result<()> {
        for file in &self.files {
            for issue in &file.issues {
                writeln!(issue_sink, "{}: {}", issue.severity().label(), issue)?;
            }
            if file.passed() {
                writeln!(ok_sink, "OK: {}", file.file_id)?;
            }
        }
        ok_sink.flush()?;
        issue_sink.flush()
    }
}
