//! CLI command implementations
//!
//! Run sequence for both commands:
//! 1. Configuration load (file + flags)
//! 2. Schema registry (validate only)
//! 3. Input discovery; no input aborts the run before any output
//! 4. Per-file processing, to completion, in file name order
//! 5. Status lines and outcome

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::table::discover_inputs;
use crate::transform::Transformer;
use crate::validator::TableValidator;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Outcome of a run that processed the whole file set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every file passed (validate) or was written (build)
    Success,
    /// At least one fail-severity issue (validate) or skipped file (build)
    Failure,
}

impl RunOutcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            RunOutcome::Success
        } else {
            RunOutcome::Failure
        }
    }

    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::Failure => 1,
        }
    }
}

/// Process exit code for a finished or aborted run
pub fn exit_code(result: &CliResult<RunOutcome>) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => e.exit_code(),
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<RunOutcome> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<RunOutcome> {
    match cmd {
        Command::Validate { config, docs } => validate(&config, docs),
        Command::Build { config, docs, out } => build(&config, docs, out),
    }
}

/// `validate` against stdout/stderr
pub fn validate(config_path: &Path, docs: Option<PathBuf>) -> CliResult<RunOutcome> {
    let config = prepare(config_path, docs, None)?;
    run_validate(&config, &mut io::stdout(), &mut io::stderr())
}

/// `build` against stdout/stderr
pub fn build(
    config_path: &Path,
    docs: Option<PathBuf>,
    out: Option<PathBuf>,
) -> CliResult<RunOutcome> {
    let config = prepare(config_path, docs, out)?;
    run_build(&config, &mut io::stdout(), &mut io::stderr())
}

fn prepare(config_path: &Path, docs: Option<PathBuf>, out: Option<PathBuf>) -> CliResult<Config> {
    let config = Config::load(config_path)?.with_overrides(docs, out);
    Logger::set_min_severity(config.log_severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("config", config_path.display().to_string().as_str())],
    );
    Ok(config)
}

/// Validates every input table, writing status lines to the given sinks.
pub fn run_validate<O: Write, E: Write>(
    config: &Config,
    ok_sink: &mut O,
    issue_sink: &mut E,
) -> CliResult<RunOutcome> {
    log_event(Event::RunStart);

    let registry = config.registry()?;
    log_event_with_fields(
        Event::SchemasLoaded,
        &[("count", registry.len().to_string().as_str())],
    );

    let inputs = discover(&config.docs_dir)?;

    let report = TableValidator::new(&registry).validate_files(&inputs);
    report.render(ok_sink, issue_sink)?;

    let fails = report.fail_count().to_string();
    let warnings = report.warn_count().to_string();
    log_event_with_fields(
        Event::RunComplete,
        &[("fails", fails.as_str()), ("warnings", warnings.as_str())],
    );

    Ok(RunOutcome::from_success(report.is_success()))
}

/// Transforms every input table, writing progress lines to the given sinks.
pub fn run_build<O: Write, E: Write>(
    config: &Config,
    out_sink: &mut O,
    err_sink: &mut E,
) -> CliResult<RunOutcome> {
    log_event(Event::RunStart);

    let inputs = discover(&config.docs_dir)?;

    let report = Transformer::new(&config.out_dir)
        .run(&inputs)
        .map_err(|e| abort(CliError::from(e)))?;
    report.render(out_sink, err_sink)?;

    let written = report.written.len().to_string();
    let skipped = report.skipped.len().to_string();
    log_event_with_fields(
        Event::RunComplete,
        &[("skipped", skipped.as_str()), ("written", written.as_str())],
    );

    Ok(RunOutcome::from_success(report.is_complete()))
}

fn discover(docs_dir: &Path) -> CliResult<Vec<PathBuf>> {
    let inputs = discover_inputs(docs_dir).map_err(|e| abort(CliError::from(e)))?;
    log_event_with_fields(
        Event::InputsDiscovered,
        &[("count", inputs.len().to_string().as_str())],
    );
    Ok(inputs)
}

fn abort(err: CliError) -> CliError {
    log_event_with_fields(Event::RunAborted, &[("code", err.code_str())]);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(RunOutcome::Success.exit_code(), 0);
        assert_eq!(RunOutcome::Failure.exit_code(), 1);
        assert_eq!(RunOutcome::from_success(false), RunOutcome::Failure);
    }

    #[test]
    fn test_exit_code_for_result() {
        assert_eq!(exit_code(&Ok(RunOutcome::Success)), 0);
        assert_eq!(exit_code(&Ok(RunOutcome::Failure)), 1);
        let aborted: CliResult<RunOutcome> = Err(CliError::config_error("bad log level"));
        assert_eq!(exit_code(&aborted), 2);
    }
}
