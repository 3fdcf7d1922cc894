//! CLI module
//!
//! Provides the command-line interface for:
//! - validate: check every table, print status lines, exit 0/1
//! - build: write JSON documents and the manifest, exit 0/1
//!
//! Aborted runs (no input, bad config, unwritable output) exit 2.

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{
    build, exit_code, run, run_build, run_command, run_validate, validate, RunOutcome,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult, EXIT_FATAL};
