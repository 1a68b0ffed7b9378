//! Coercion reports printed by the CLI.
//!
//! A [`Coercion`] records what the predicates say about one value. Reports render either as aligned text columns
//! or as JSON, depending on [`ReportConfig`].

use serde::Serialize;
use truthy_core::{Value, is_falsy, is_nan, is_truthy};

use crate::config::ReportConfig;

/// What the predicates say about one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coercion {
    /// The text the value was read from
    pub input: String,
    /// The value rendered in literal syntax
    pub value: String,
    pub kind: &'static str,
    pub truthy: bool,
    pub falsy: bool,
    pub nan: bool,
    /// Which falsy value it is, when falsy
    pub falsy_member: Option<&'static str>,
}

impl Coercion {
    pub fn of(input: &str, value: &Value) -> Self {
        Self {
            input: input.to_string(),
            value: value.to_string(),
            kind: value.kind().as_str(),
            truthy: is_truthy(value),
            falsy: is_falsy(value),
            nan: is_nan(value),
            falsy_member: value.as_falsy().map(|member| member.name()),
        }
    }

    pub fn verdict(&self) -> &'static str {
        if self.truthy { "truthy" } else { "falsy" }
    }
}

/// The outcome of filtering an array by truthiness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterReport {
    /// Truthy elements, in order
    #[serde(serialize_with = "serialize_rendered")]
    pub kept: Vec<Value>,
    /// Falsy elements, in order
    #[serde(serialize_with = "serialize_rendered")]
    pub dropped: Vec<Value>,
}

impl FilterReport {
    pub fn of(items: &[Value]) -> Self {
        let (kept, dropped) = items.iter().cloned().partition(is_truthy);
        Self { kept, dropped }
    }
}

fn serialize_rendered<S: serde::Serializer>(values: &[Value], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(ToString::to_string))
}

/// Renders rows as aligned columns: value, kind (optional), verdict.
pub fn render_text(rows: &[Coercion], config: &ReportConfig) -> String {
    let value_width = rows.iter().map(|r| r.value.chars().count()).max().unwrap_or(0);
    let kind_width = rows.iter().map(|r| r.kind.len()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let mut line = format!("{:<value_width$}  ", row.value);
        if config.show_kind {
            line.push_str(&format!("{:<kind_width$}  ", row.kind));
        }
        line.push_str(row.verdict());
        if let Some(member) = row.falsy_member {
            line.push_str(&format!(" ({member})"));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Renders any report as pretty-printed JSON.
pub fn render_json<T: Serialize + ?Sized>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
