//! Validation issues
//!
//! Issues are data, not errors: every problem found is recorded and the
//! scan continues. Only `Fail` issues affect the run's outcome.

use std::fmt;

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Fails the run
    Fail,
    /// Reported only
    Warn,
}

impl IssueSeverity {
    /// Status-line prefix
    pub fn label(&self) -> &'static str {
        match self {
            IssueSeverity::Fail => "ERROR",
            IssueSeverity::Warn => "WARNING",
        }
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Kinds of validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// File has no header row; file not checked further
    MissingHeader,
    /// File could not be read or decoded; file not checked further
    Unreadable,
    /// Header differs from the registered one
    HeaderMismatch,
    /// Row lacks a required `name`
    MissingName,
    /// `name` repeats within the file (case-insensitive)
    DuplicateName,
    /// Integer column holds a non-integer
    NotAnInteger,
    /// Token-restricted column holds a value outside its set
    DisallowedToken,
    /// No schema registered for the file
    UnregisteredSchema,
}

impl IssueKind {
    /// Stable issue code
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::MissingHeader => "MISSING_HEADER",
            IssueKind::Unreadable => "UNREADABLE",
            IssueKind::HeaderMismatch => "HEADER_MISMATCH",
            IssueKind::MissingName => "MISSING_NAME",
            IssueKind::DuplicateName => "DUPLICATE_NAME",
            IssueKind::NotAnInteger => "NOT_AN_INTEGER",
            IssueKind::DisallowedToken => "DISALLOWED_TOKEN",
            IssueKind::UnregisteredSchema => "UNREGISTERED_SCHEMA",
        }
    }

    pub fn severity(&self) -> IssueSeverity {
        match self {
            IssueKind::UnregisteredSchema => IssueSeverity::Warn,
            _ => IssueSeverity::Fail,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    kind: IssueKind,
    file_id: String,
    /// Row number (header is row 1), for row-level issues
    row: Option<usize>,
    message: String,
}

impl Issue {
    fn new(kind: IssueKind, file_id: &str, row: Option<usize>, message: String) -> Self {
        Self {
            kind,
            file_id: file_id.to_string(),
            row,
            message,
        }
    }

    pub fn missing_header(file_id: &str) -> Self {
        Self::new(
            IssueKind::MissingHeader,
            file_id,
            None,
            "missing header row.".into(),
        )
    }

    pub fn unreadable(file_id: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            IssueKind::Unreadable,
            file_id,
            None,
            format!("unreadable: {}", reason),
        )
    }

    pub fn unregistered_schema(file_id: &str) -> Self {
        Self::new(
            IssueKind::UnregisteredSchema,
            file_id,
            None,
            "no expected schema registered; skipping header enforcement.".into(),
        )
    }

    pub fn header_mismatch(file_id: &str, expected: &[String], actual: &[String]) -> Self {
        Self::new(
            IssueKind::HeaderMismatch,
            file_id,
            None,
            format!(
                "header mismatch.\n  expected: {:?}\n  got:      {:?}",
                expected, actual
            ),
        )
    }

    pub fn missing_name(file_id: &str, row: usize) -> Self {
        Self::new(
            IssueKind::MissingName,
            file_id,
            Some(row),
            "missing name.".into(),
        )
    }

    pub fn duplicate_name(file_id: &str, row: usize, name: &str) -> Self {
        Self::new(
            IssueKind::DuplicateName,
            file_id,
            Some(row),
            format!("duplicate name '{}'.", name),
        )
    }

    pub fn not_an_integer(file_id: &str, row: usize, column: &str, value: &str) -> Self {
        Self::new(
            IssueKind::NotAnInteger,
            file_id,
            Some(row),
            format!("column '{}' should be an integer, got '{}'.", column, value),
        )
    }

    /// `allowed` is listed in iteration order; pass a sorted set.
    pub fn disallowed_token<'a, I>(
        file_id: &str,
        row: usize,
        column: &str,
        value: &str,
        allowed: I,
    ) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let allowed: Vec<&String> = allowed.into_iter().collect();
        Self::new(
            IssueKind::DisallowedToken,
            file_id,
            Some(row),
            format!(
                "column '{}' has '{}' but allowed: {:?}",
                column, value, allowed
            ),
        )
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn severity(&self) -> IssueSeverity {
        self.kind.severity()
    }

    pub fn is_fail(&self) -> bool {
        self.severity() == IssueSeverity::Fail
    }

    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Renders `<file>[:<row>]: <message>`
impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{}:{}: {}", self.file_id, row, self.message),
            None => write!(f, "{}: {}", self.file_id, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_only_unregistered_schema_warns() {
        assert_eq!(IssueKind::UnregisteredSchema.severity(), IssueSeverity::Warn);
        assert_eq!(IssueKind::HeaderMismatch.severity(), IssueSeverity::Fail);
        assert_eq!(IssueKind::MissingHeader.severity(), IssueSeverity::Fail);
    }

    #[test]
    fn test_row_issue_display() {
        let issue = Issue::duplicate_name("shoot.csv", 4, "Bolter");
        assert_eq!(issue.to_string(), "shoot.csv:4: duplicate name 'Bolter'.");
        assert_eq!(issue.row(), Some(4));
    }

    #[test]
    fn test_unreadable_names_file_once() {
        let reason = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad byte");
        let issue = Issue::unreadable("leader_traits.csv", &reason);
        assert_eq!(issue.to_string(), "leader_traits.csv: unreadable: bad byte");
        assert_eq!(issue.kind(), IssueKind::Unreadable);
    }

    #[test]
    fn test_file_issue_display() {
        let issue = Issue::missing_header("shoot.csv");
        assert_eq!(issue.to_string(), "shoot.csv: missing header row.");
    }

    #[test]
    fn test_header_mismatch_lists_both_sequences() {
        let expected = vec!["name".to_string(), "ap".to_string()];
        let actual = vec!["ap".to_string(), "name".to_string()];
        let issue = Issue::header_mismatch("shoot.csv", &expected, &actual);
        assert!(issue.message().contains(r#"expected: ["name", "ap"]"#));
        assert!(issue.message().contains(r#"got:      ["ap", "name"]"#));
    }

    #[test]
    fn test_disallowed_token_lists_sorted_set() {
        let allowed: BTreeSet<String> = ["short", "long", "melee"].iter().map(|s| s.to_string()).collect();
        let issue = Issue::disallowed_token("a.csv", 2, "range", "far", &allowed);
        assert!(issue
            .message()
            .ends_with(r#"allowed: ["long", "melee", "short"]"#));
    }
}
