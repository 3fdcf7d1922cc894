//! CLI-specific error types
//!
//! Every CLI error aborts the run with exit code 2. Validation failures
//! are not errors; they are reported through `RunOutcome`.

use std::fmt;
use std::io;

use crate::schema::SchemaError;
use crate::table::TableError;
use crate::transform::TransformError;

/// Exit code for an aborted run
pub const EXIT_FATAL: i32 = 2;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Schema registry could not be loaded
    SchemaError,
    /// Input directory missing or empty
    InputError,
    /// Output could not be written
    OutputError,
    /// I/O error on the status streams
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CLI_CONFIG_ERROR",
            Self::SchemaError => "CLI_SCHEMA_ERROR",
            Self::InputError => "CLI_INPUT_ERROR",
            Self::OutputError => "CLI_OUTPUT_ERROR",
            Self::IoError => "CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_FATAL
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::new(CliErrorCode::SchemaError, e.to_string())
    }
}

impl From<TableError> for CliError {
    fn from(e: TableError) -> Self {
        Self::new(CliErrorCode::InputError, e.to_string())
    }
}

impl From<TransformError> for CliError {
    fn from(e: TransformError) -> Self {
        let code = match e {
            TransformError::NoInputFiles => CliErrorCode::InputError,
            _ => CliErrorCode::OutputError,
        };
        Self::new(code, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
