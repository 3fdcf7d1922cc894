//! CLI argument definitions using clap
//!
//! Commands:
//! - tablecheck validate [--config <path>] [--docs <dir>]
//! - tablecheck build [--config <path>] [--docs <dir>] [--out <dir>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tablecheck - validate and publish CSV rule tables
#[derive(Parser, Debug)]
#[command(name = "tablecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every table against its registered schema
    Validate {
        /// Path to configuration file (defaults apply if absent)
        #[arg(long, default_value = "./tablecheck.json")]
        config: PathBuf,

        /// Input directory, overrides `docs_dir`
        #[arg(long)]
        docs: Option<PathBuf>,
    },

    /// Write every table as a JSON document plus a manifest
    Build {
        /// Path to configuration file (defaults apply if absent)
        #[arg(long, default_value = "./tablecheck.json")]
        config: PathBuf,

        /// Input directory, overrides `docs_dir`
        #[arg(long)]
        docs: Option<PathBuf>,

        /// Output directory, overrides `out_dir`
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_defaults() {
        let cli = Cli::try_parse_from(["tablecheck", "validate"]).unwrap();
        match cli.command {
            Command::Validate { config, docs } => {
                assert_eq!(config, PathBuf::from("./tablecheck.json"));
                assert!(docs.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_build_overrides() {
        let cli =
            Cli::try_parse_from(["tablecheck", "build", "--docs", "tables", "--out", "public"])
                .unwrap();
        match cli.command {
            Command::Build { docs, out, .. } => {
                assert_eq!(docs, Some(PathBuf::from("tables")));
                assert_eq!(out, Some(PathBuf::from("public")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
