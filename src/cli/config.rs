//! Configuration file
//!
//! Optional JSON document; when the file is absent every default applies:
//!
//! ```json
//! {
//!   "docs_dir": "docs",
//!   "out_dir": "site/data",
//!   "schema_file": null,
//!   "log_level": "warn"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::schema::{SchemaLoader, SchemaRegistry};

use super::errors::{CliError, CliResult};

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the input tables
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Directory receiving JSON documents and the manifest
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Registry document replacing the built-in table set
    #[serde(default)]
    pub schema_file: Option<PathBuf>,

    /// Minimum severity of structured log events
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}
fn default_out_dir() -> PathBuf {
    Path::new("site").join("data")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            out_dir: default_out_dir(),
            schema_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults if the file does not exist
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate a configuration document
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.docs_dir.as_os_str().is_empty() {
            return Err(CliError::config_error("docs_dir must not be empty"));
        }

        if self.out_dir.as_os_str().is_empty() {
            return Err(CliError::config_error("out_dir must not be empty"));
        }

        self.log_severity()?;

        Ok(())
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, docs: Option<PathBuf>, out: Option<PathBuf>) -> Self {
        if let Some(docs) = docs {
            self.docs_dir = docs;
        }
        if let Some(out) = out {
            self.out_dir = out;
        }
        self
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Build the schema registry this run enforces
    pub fn registry(&self) -> CliResult<SchemaRegistry> {
        match &self.schema_file {
            Some(path) => Ok(SchemaLoader::load_file(path)?),
            None => Ok(SchemaRegistry::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("tablecheck.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.out_dir, Path::new("site").join("data"));
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = Config::from_json(r#"{"docs_dir": "tables"}"#).unwrap();
        assert_eq!(config.docs_dir, PathBuf::from("tables"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let err = Config::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(err.message().contains("log_level"));
    }

    #[test]
    fn test_rejects_empty_dir() {
        assert!(Config::from_json(r#"{"out_dir": ""}"#).is_err());
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(Config::from_json(r#"{"data_dir": "x"}"#).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some("in".into()), None);
        assert_eq!(config.docs_dir, PathBuf::from("in"));
        assert_eq!(config.out_dir, default_out_dir());
    }

    #[test]
    fn test_builtin_registry_by_default() {
        let registry = Config::default().registry().unwrap();
        assert!(registry.expected_header("shoot.csv").is_some());
    }

    #[test]
    fn test_missing_schema_file_is_error() {
        let config = Config {
            schema_file: Some("/nonexistent/tables.json".into()),
            ..Config::default()
        };
        assert!(config.registry().is_err());
    }
}
