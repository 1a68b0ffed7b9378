//! Report configuration for the `truthy` CLI.

use clap::ValueEnum;

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// How reports are written
    pub format: OutputFormat,
    /// How command-line values are read
    pub input: InputSyntax,
    /// Whether text reports include the value kind column
    pub show_kind: bool,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable columns
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Syntax of values given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputSyntax {
    /// Literal syntax (`undefined`, `-0`, `0n`, `new Map()`, ...)
    Literal,
    /// JSON documents
    Json,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            input: InputSyntax::Literal,
            show_kind: true,
        }
    }
}

impl ReportConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the input syntax
    pub fn with_input(mut self, input: InputSyntax) -> Self {
        self.input = input;
        self
    }

    /// Show or hide the kind column
    pub fn with_show_kind(mut self, show_kind: bool) -> Self {
        self.show_kind = show_kind;
        self
    }
}
