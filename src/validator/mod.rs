//! Validator for table files
//!
//! Produces a complete list of issues for the file set and an overall
//! success flag (no fail-severity issue anywhere).

mod issue;
mod report;
mod rules;
mod validator;

pub use issue::{Issue, IssueKind, IssueSeverity};
pub use report::{FileOutcome, ValidationReport};
pub use rules::{is_integer, ColumnRule, Verdict};
pub use validator::{TableValidator, NAME_COLUMN};
