//! Build manifest
//!
//! One entry per successfully transformed table, keyed by input file name:
//!
//! ```json
//! {
//!   "shoot.csv": {
//!     "rows": 12,
//!     "out": "shoot.json"
//!   }
//! }
//! ```
//!
//! Written once, after every table has been processed.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::document::write_document;
use super::errors::TransformResult;

/// Per-file manifest entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Number of data rows
    pub rows: usize,
    /// Output document name
    pub out: String,
}

/// Aggregate manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a transformed file
    pub fn record(&mut self, file_id: impl Into<String>, rows: usize, out: impl Into<String>) {
        self.entries.insert(
            file_id.into(),
            ManifestEntry {
                rows,
                out: out.into(),
            },
        );
    }

    pub fn get(&self, file_id: &str) -> Option<&ManifestEntry> {
        self.entries.get(file_id)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a manifest document
    pub fn from_json(json: &str) -> TransformResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the manifest document
    pub fn write_to_file(&self, path: &Path) -> TransformResult<()> {
        write_document(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::document::to_document;

    #[test]
    fn test_manifest_format() {
        let mut manifest = Manifest::new();
        manifest.record("shoot.csv", 2, "shoot.json");

        let body = to_document(&manifest).unwrap();
        assert_eq!(
            body,
            "{\n  \"shoot.csv\": {\n    \"rows\": 2,\n    \"out\": \"shoot.json\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_manifest_keys_sorted() {
        let mut manifest = Manifest::new();
        manifest.record("shoot.csv", 1, "shoot.json");
        manifest.record("fight.csv", 0, "fight.json");

        let keys: Vec<_> = manifest.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["fight.csv", "shoot.csv"]);
    }

    #[test]
    fn test_manifest_parse() {
        let manifest =
            Manifest::from_json(r#"{"rules.csv": {"rows": 0, "out": "rules.json"}}"#).unwrap();
        assert_eq!(manifest.get("rules.csv").unwrap().rows, 0);
        assert!(Manifest::from_json("[]").is_err());
    }
}
