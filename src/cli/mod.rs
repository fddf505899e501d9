//! CLI module for the SOL25 compiler
//!
//! This module provides the command-line interface of the `sol25` binary.
//!
//! ## Invocation
//!
//! - `sol25 < input.sol25 > output.xml` - Compile the program read from stdin, write XML to stdout
//! - `sol25 --help` - Print usage and exit
//!
//! Any other argument (or `--help` combined with anything) is rejected with exit code 10.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::process;

use clap::Parser;

use crate::frontend::diagnostics::CompileError;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// Missing parameter or forbidden parameter combination.
    pub const INVALID_PARAMETERS: ExitCode = ExitCode(10);
    /// Input could not be read.
    pub const INPUT_ERROR: ExitCode = ExitCode(11);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create an invalid-parameters error (exit code 10).
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::INVALID_PARAMETERS)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl From<CompileError> for CliError {
    /// Render the error as a miette report and keep its taxonomy exit code.
    fn from(err: CompileError) -> Self {
        let code = err.exit_code();
        let report = miette::Report::new(err);
        Self::with_code(format!("{report:?}"), code)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// SOL25 compiler front end: reads a program on stdin and writes its XML form to stdout
#[derive(Parser, Debug)]
#[command(name = "sol25")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Print usage and exit
    #[arg(long)]
    pub help: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let outcome = Cli::try_parse()
        .map_err(|e| CliError::invalid_parameters(invalid_parameters_message(&e)))
        .and_then(execute);

    match outcome {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message.trim_end());
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed command line and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    if cli.help {
        return commands::print_help();
    }
    commands::compile_stdin()
}

fn invalid_parameters_message(err: &clap::Error) -> String {
    format!("{}\nUnknown parameter or forbidden parameter combination; see 'sol25 --help'.", err.to_string().trim_end())
}

// ============================================================================
// Tests
// ============================================================================
