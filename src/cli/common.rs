//! Shared CLI plumbing: error type, exit codes, session opening, output helpers.

use crate::config::Config;
use crate::services::Session;
use serde::Serialize;
use std::fmt;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input (unknown category, invalid option value, ...)
    ValidationError = 1,
    /// Storage, config, or serialization failure
    IoError = 2,
    /// Referenced tool does not exist
    NotFound = 3,
}

impl ExitCode {
    /// Numeric process exit status.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error surfaced to the user by a CLI command.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code the process terminates with
    pub kind: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O, config, or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Missing tool.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::NotFound,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type returned by command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads configuration and opens a catalog session.
pub fn open_session(ephemeral: bool) -> CliResult<Session> {
    let config = Config::load()
        .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
    Session::open(config, ephemeral)
        .map_err(|e| CliError::io(format!("Failed to open catalog: {e:#}")))
}

/// Prints `value` as a single line of JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
