//! Column value rules
//!
//! A single decision per cell, combining the integer rule and the token
//! rule for that column:
//!
//! 1. empty value: accepted (not provided)
//! 2. integer column: tokens are checked first, then the value must parse
//! 3. token-only column: value must be one of the tokens
//! 4. anything else: accepted
//!
//! A column that is both an integer column and token-restricted is only
//! ever judged by rule 2.

use std::collections::BTreeSet;

/// Outcome of checking one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    NotAnInteger,
    DisallowedToken,
}

/// Rules that apply to one column of one file
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule<'a> {
    pub is_int: bool,
    pub tokens: &'a BTreeSet<String>,
}

impl<'a> ColumnRule<'a> {
    pub fn new(is_int: bool, tokens: &'a BTreeSet<String>) -> Self {
        Self { is_int, tokens }
    }

    /// Returns whether the rule can reject anything
    pub fn is_unrestricted(&self) -> bool {
        !self.is_int && self.tokens.is_empty()
    }

    /// Judges one (already trimmed) value
    pub fn check(&self, value: &str) -> Verdict {
        if value.is_empty() || self.tokens.contains(value) {
            return Verdict::Accept;
        }

        if self.is_int {
            if is_integer(value) {
                Verdict::Accept
            } else {
                Verdict::NotAnInteger
            }
        } else if !self.tokens.is_empty() {
            Verdict::DisallowedToken
        } else {
            Verdict::Accept
        }
    }
}

/// Optional sign, then ASCII digit groups joined by single underscores
/// (`1_000`), within the `i128` range.
pub fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);
    let grouped = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    grouped && value.replace('_', "").parse::<i128>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("-3"));
        assert!(is_integer("+12"));
        assert!(is_integer("123456789012345678901234567890"));
    }

    #[test]
    fn test_is_integer_digit_groups() {
        assert!(is_integer("1_000"));
        assert!(is_integer("-1_000_000"));
        assert!(!is_integer("_1"));
        assert!(!is_integer("1_"));
        assert!(!is_integer("1__0"));
        assert!(!is_integer("+_1"));
    }

    #[test]
    fn test_is_integer_bounded_by_i128() {
        assert!(is_integer("170141183460469231731687303715884105727"));
        assert!(is_integer("-170141183460469231731687303715884105728"));
        assert!(!is_integer("170141183460469231731687303715884105728"));
    }

    #[test]
    fn test_is_integer_rejects_non_numbers() {
        assert!(!is_integer(""));
        assert!(!is_integer("-"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer("3+"));
        assert!(!is_integer("*"));
        assert!(!is_integer("D6"));
    }

    #[test]
    fn test_int_column_accepts_token_before_parsing() {
        let wildcard = tokens(&["*"]);
        let rule = ColumnRule::new(true, &wildcard);
        assert_eq!(rule.check("*"), Verdict::Accept);
        assert_eq!(rule.check("2"), Verdict::Accept);
        assert_eq!(rule.check("x"), Verdict::NotAnInteger);
    }

    #[test]
    fn test_int_column_without_tokens_rejects_wildcard() {
        let none = BTreeSet::new();
        let rule = ColumnRule::new(true, &none);
        assert_eq!(rule.check("*"), Verdict::NotAnInteger);
    }

    #[test]
    fn test_token_column_restricts_values() {
        let ranges = tokens(&["melee", "short"]);
        let rule = ColumnRule::new(false, &ranges);
        assert_eq!(rule.check("melee"), Verdict::Accept);
        assert_eq!(rule.check("long"), Verdict::DisallowedToken);
        assert_eq!(rule.check("3"), Verdict::DisallowedToken);
    }

    #[test]
    fn test_empty_always_accepted() {
        let ranges = tokens(&["melee"]);
        let none = BTreeSet::new();
        assert_eq!(ColumnRule::new(true, &none).check(""), Verdict::Accept);
        assert_eq!(ColumnRule::new(false, &ranges).check(""), Verdict::Accept);
    }

    #[test]
    fn test_unrestricted_column_accepts_anything() {
        let none = BTreeSet::new();
        let rule = ColumnRule::new(false, &none);
        assert!(rule.is_unrestricted());
        assert_eq!(rule.check("anything"), Verdict::Accept);
    }
}
