//! CLI module for `truthy`
//!
//! ## Commands
//!
//! - `check <VALUE>...` - Report how each value coerces in boolean context
//! - `filter <ARRAY>` - Keep the truthy elements of an array
//! - `toggle <BOOL>` - Flip a boolean
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<String>` (the text to print) instead of printing and calling
//! `process::exit`. Only the top-level `run()` function prints, handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::{InputSyntax, OutputFormat, ReportConfig};
use crate::version::TRUTHY_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
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

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Check how values coerce in a boolean context
#[derive(Parser, Debug)]
#[command(name = "truthy")]
#[command(version = TRUTHY_VERSION)]
#[command(about = "Check how values coerce in a boolean context", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Syntax of the values given on the command line
    #[arg(long, value_enum, default_value_t = InputSyntax::Literal, global = true)]
    pub input: InputSyntax,

    /// Hide the kind column in text output
    #[arg(long, global = true)]
    pub no_kind: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report how each value coerces in boolean context
    Check {
        /// Values to check, e.g. `0`, `'""'`, `null`, `[]`
        #[arg(value_name = "VALUE", required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Keep the truthy elements of an array
    Filter {
        /// An array, e.g. `[0, 1, 2]`
        #[arg(value_name = "ARRAY")]
        array: String,
    },

    /// Flip a boolean
    Toggle {
        /// `true` or `false`
        #[arg(value_name = "BOOL")]
        value: String,
    },
}

impl Cli {
    /// The report configuration selected by the global flags.
    pub fn config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_format(self.format)
            .with_input(self.input)
            .with_show_kind(!self.no_kind)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its output.
pub fn execute(cli: Cli) -> CliResult<String> {
    let config = cli.config();
    tracing::debug!(?config, "running command");

    match cli.command {
        Command::Check { values } => commands::check_values(&values, &config),
        Command::Filter { array } => commands::filter_array(&array, &config),
        Command::Toggle { value } => commands::toggle_value(&value, &config),
    }
}

// ============================================================================
// Tests
// ============================================================================
