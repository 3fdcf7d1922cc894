//! Schema entry definitions
//!
//! A schema entry describes one table file:
//! - header: the canonical, order-sensitive column list
//! - int_columns: columns whose non-empty values must parse as integers
//! - allowed_tokens: per-column literal values accepted verbatim

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Registered structure for a single table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Canonical header, compared in order
    pub header: Vec<String>,
    /// Columns that must parse as integers when non-empty
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub int_columns: BTreeSet<String>,
    /// Tokens accepted verbatim per column
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub allowed_tokens: BTreeMap<String, BTreeSet<String>>,
}

impl SchemaEntry {
    /// Create an entry with the given header and no column rules
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            int_columns: BTreeSet::new(),
            allowed_tokens: BTreeMap::new(),
        }
    }

    /// Declare integer columns
    pub fn with_int_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.int_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Declare the tokens accepted verbatim in `column`
    pub fn with_tokens<I, S>(mut self, column: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tokens
            .entry(column.into())
            .or_default()
            .extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Returns the allowed tokens for `column`, if any are declared
    pub fn tokens_for(&self, column: &str) -> Option<&BTreeSet<String>> {
        self.allowed_tokens.get(column)
    }
}
