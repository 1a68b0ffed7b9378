//! CLI command implementations
//!
//! All command functions return `CliResult<String>` with the text to print.
//! Printing, error reporting and exits happen in the top-level `run()`.

use serde::Serialize;
use truthy_core::{Value, toggle};

use super::{CliError, CliResult};
use crate::config::{InputSyntax, OutputFormat, ReportConfig};
use crate::literal;
use crate::report::{Coercion, FilterReport, render_json, render_text};

// ============================================================================
// Input
// ============================================================================

/// Read one command-line value using the configured input syntax.
pub fn read_value(raw: &str, config: &ReportConfig) -> CliResult<Value> {
    let value = match config.input {
        InputSyntax::Literal => {
            literal::parse(raw).map_err(|e| CliError::failure(literal::render_error(raw, e)))?
        }
        InputSyntax::Json => serde_json::from_str::<serde_json::Value>(raw)
            .map(Value::from)
            .map_err(|e| CliError::failure(format!("invalid JSON `{raw}`: {e}")))?,
    };
    tracing::debug!(input = raw, kind = %value.kind(), "read value");
    Ok(value)
}

// ============================================================================
// Commands
// ============================================================================

/// `truthy check`: one report row per value.
pub fn check_values(raw_values: &[String], config: &ReportConfig) -> CliResult<String> {
    let rows = raw_values
        .iter()
        .map(|raw| read_value(raw, config).map(|value| Coercion::of(raw, &value)))
        .collect::<CliResult<Vec<_>>>()?;

    match config.format {
        OutputFormat::Text => Ok(render_text(&rows, config)),
        OutputFormat::Json => to_json(&rows),
    }
}

/// `truthy filter`: keep the truthy elements of an array.
pub fn filter_array(raw: &str, config: &ReportConfig) -> CliResult<String> {
    let value = read_value(raw, config)?;
    let Some(items) = value.as_array() else {
        tracing::warn!(kind = %value.kind(), "filter given a non-array value");
        return Err(CliError::failure(format!(
            "filter expects an array, found {} `{value}`",
            value.kind()
        )));
    };

    let report = FilterReport::of(items);
    tracing::debug!(kept = report.kept.len(), dropped = report.dropped.len(), "filtered array");

    match config.format {
        OutputFormat::Text => Ok(Value::Array(report.kept).to_string()),
        OutputFormat::Json => to_json(&report),
    }
}

/// `truthy toggle`: flip a boolean.
///
/// The argument is untyped text here, so a non-boolean is rejected at runtime rather than coerced.
pub fn toggle_value(raw: &str, config: &ReportConfig) -> CliResult<String> {
    let value = read_value(raw, config)?;
    let Some(flag) = value.as_bool() else {
        tracing::warn!(kind = %value.kind(), "toggle given a non-boolean value");
        return Err(CliError::failure(format!(
            "toggle expects a boolean, found {} `{value}`",
            value.kind()
        )));
    };
    Ok(toggle(flag).to_string())
}

fn to_json<T: Serialize + ?Sized>(report: &T) -> CliResult<String> {
    render_json(report).map_err(|e| CliError::failure(format!("failed to write JSON report: {e}")))
}

// ============================================================================
// Tests
// ============================================================================
