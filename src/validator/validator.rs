//! Table validator
//!
//! Checks, per file and in order:
//! 1. the file has a header row (otherwise nothing else can be checked)
//! 2. the header matches the registered one, order-sensitive
//! 3. every data row: required `name`, case-insensitive `name` uniqueness,
//!    and the column rules of each cell
//!
//! Every problem is recorded; the scan never stops at the first failure,
//! neither within a file nor across files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::observability::{log_event_with_fields, Event};
use crate::schema::SchemaRegistry;
use crate::table::{file_id, read_table, FieldRow, Table, TableError};

use super::issue::Issue;
use super::report::{FileOutcome, ValidationReport};
use super::rules::{ColumnRule, Verdict};

/// Column holding each row's unique identifier
pub const NAME_COLUMN: &str = "name";

/// Validates tables against a schema registry.
///
/// Stateless between files; the validator does not modify tables.
pub struct TableValidator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> TableValidator<'a> {
    /// Creates a new validator backed by the given registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validates every file and collects all issues.
    pub fn validate_files(&self, paths: &[PathBuf]) -> ValidationReport {
        let mut report = ValidationReport::new();
        for path in paths {
            report.push(self.validate_path(path));
        }
        report
    }

    /// Reads and validates one file.
    ///
    /// Read failures become issues on the returned outcome.
    pub fn validate_path(&self, path: &Path) -> FileOutcome {
        let outcome = match read_table(path) {
            Ok(table) => self.validate_table(&table),
            Err(TableError::MissingHeader { file }) => {
                let mut outcome = FileOutcome::new(&file);
                outcome.issues.push(Issue::missing_header(&file));
                outcome
            }
            Err(TableError::Csv { file, source }) => {
                let mut outcome = FileOutcome::new(&file);
                outcome.issues.push(Issue::unreadable(&file, &source));
                outcome
            }
            Err(TableError::Io { file, source }) => {
                let mut outcome = FileOutcome::new(&file);
                outcome.issues.push(Issue::unreadable(&file, &source));
                outcome
            }
            Err(e) => {
                // read_table only raises per-file errors
                let id = file_id(path);
                let mut outcome = FileOutcome::new(&id);
                outcome.issues.push(Issue::unreadable(&id, &e));
                outcome
            }
        };

        let fails = outcome.fail_count().to_string();
        let warnings = outcome.warn_count().to_string();
        log_event_with_fields(
            Event::FileValidated,
            &[
                ("file", outcome.file_id.as_str()),
                ("fails", fails.as_str()),
                ("warnings", warnings.as_str()),
            ],
        );

        outcome
    }

    /// Validates an already parsed table.
    pub fn validate_table(&self, table: &Table) -> FileOutcome {
        let mut outcome = FileOutcome::new(&table.file_id);

        self.check_header(table, &mut outcome.issues);

        let mut seen_names = HashSet::new();
        for (row_num, row) in table.numbered_rows() {
            self.check_name(&table.file_id, row_num, row, &mut seen_names, &mut outcome.issues);
            self.check_cells(&table.file_id, row_num, row, &mut outcome.issues);
        }

        outcome
    }

    fn check_header(&self, table: &Table, issues: &mut Vec<Issue>) {
        match self.registry.expected_header(&table.file_id) {
            None => issues.push(Issue::unregistered_schema(&table.file_id)),
            Some(expected) if expected != table.header.as_slice() => {
                issues.push(Issue::header_mismatch(&table.file_id, expected, &table.header));
            }
            Some(_) => {}
        }
    }

    fn check_name(
        &self,
        file: &str,
        row_num: usize,
        row: &FieldRow,
        seen: &mut HashSet<String>,
        issues: &mut Vec<Issue>,
    ) {
        if !self.registry.requires_name(file) {
            return;
        }

        let name = row.get(NAME_COLUMN).unwrap_or("");
        if name.is_empty() {
            issues.push(Issue::missing_name(file, row_num));
        } else if !seen.insert(name.to_lowercase()) {
            issues.push(Issue::duplicate_name(file, row_num, name));
        }
    }

    fn check_cells(&self, file: &str, row_num: usize, row: &FieldRow, issues: &mut Vec<Issue>) {
        let int_columns = self.registry.int_columns(file);

        for (column, value) in row.iter() {
            let tokens = self.registry.allowed_tokens(file, column);
            let rule = ColumnRule::new(int_columns.contains(column), tokens);
            if rule.is_unrestricted() {
                continue;
            }

            match rule.check(value) {
                Verdict::Accept => {}
                Verdict::NotAnInteger => {
                    issues.push(Issue::not_an_integer(file, row_num, column, value));
                }
                Verdict::DisallowedToken => {
                    issues.push(Issue::disallowed_token(file, row_num, column, value, tokens));
                }
            }
        }
    }
}
