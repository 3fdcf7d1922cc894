//! Schema loader for registry documents on disk
//!
//! A registry document is a JSON object:
//!
//! ```json
//! {
//!   "tables": {
//!     "shoot.csv": {
//!       "header": ["name", "ap"],
//!       "int_columns": ["ap"],
//!       "allowed_tokens": { "ap": ["*"] }
//!     }
//!   },
//!   "name_exempt": ["rules.csv"]
//! }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::errors::{SchemaError, SchemaResult};
use super::registry::SchemaRegistry;
use super::types::SchemaEntry;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryDocument {
    tables: HashMap<String, SchemaEntry>,
    #[serde(default)]
    name_exempt: BTreeSet<String>,
}

/// Builds a `SchemaRegistry` from a registry document.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Loads and parses a registry document from disk.
    pub fn load_file(path: &Path) -> SchemaResult<SchemaRegistry> {
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&path.display().to_string(), &content)
    }

    /// Parses a registry document. `origin` is used in error messages.
    pub fn from_json(origin: &str, content: &str) -> SchemaResult<SchemaRegistry> {
        let doc: RegistryDocument = serde_json::from_str(content)
            .map_err(|e| SchemaError::malformed(origin, format!("Invalid JSON: {}", e)))?;

        for (file, entry) in &doc.tables {
            Self::check_entry(origin, file, entry)?;
        }

        Ok(SchemaRegistry::new(doc.tables, doc.name_exempt))
    }

    /// Rejects entries whose header is empty or repeats a column.
    fn check_entry(origin: &str, file: &str, entry: &SchemaEntry) -> SchemaResult<()> {
        if entry.header.is_empty() {
            return Err(SchemaError::malformed(
                origin,
                format!("'{}' declares an empty header", file),
            ));
        }

        let mut seen = BTreeSet::new();
        for column in &entry.header {
            if !seen.insert(column.as_str()) {
                return Err(SchemaError::malformed(
                    origin,
                    format!("'{}' repeats column '{}'", file, column),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "tables": {
            "shoot.csv": {
                "header": ["name", "ap"],
                "int_columns": ["ap"],
                "allowed_tokens": { "ap": ["*"] }
            },
            "rules.csv": { "header": ["name", "step"] }
        },
        "name_exempt": ["rules.csv"]
    }"#;

    #[test]
    fn test_load_registry_document() {
        let registry = SchemaLoader::from_json("<test>", DOC).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.expected_header("shoot.csv").unwrap(), ["name", "ap"]);
        assert!(registry.int_columns("shoot.csv").contains("ap"));
        assert!(registry.allowed_tokens("shoot.csv", "ap").contains("*"));
        assert!(!registry.requires_name("rules.csv"));
    }

    #[test]
    fn test_load_file_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tables.json");
        fs::write(&path, DOC).unwrap();

        let registry = SchemaLoader::load_file(&path).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let tmp = TempDir::new().unwrap();
        let result = SchemaLoader::load_file(&tmp.path().join("absent.json"));
        assert!(matches!(result, Err(SchemaError::Unreadable { .. })));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result = SchemaLoader::from_json("<test>", "{ not json");
        assert!(matches!(result, Err(SchemaError::Malformed { .. })));
    }

    #[test]
    fn test_repeated_column_rejected() {
        let doc = r#"{ "tables": { "a.csv": { "header": ["name", "name"] } } }"#;
        let err = SchemaLoader::from_json("<test>", doc).unwrap_err();
        assert!(err.to_string().contains("repeats column 'name'"));
    }

    #[test]
    fn test_empty_header_rejected() {
        let doc = r#"{ "tables": { "a.csv": { "header": [] } } }"#;
        assert!(SchemaLoader::from_json("<test>", doc).is_err());
    }
}
