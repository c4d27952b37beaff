//! Shared utilities for CLI commands

use serde_json::{Map, Value};
use tabled::{Table, settings::Style};

use crate::cli::error::{CliError, CliResult};

/// Cut `s` to at most `max` characters, marking the cut with `...`.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    kept + "..."
}

/// Parse a `--params` argument. Absent means no arguments.
pub fn parse_params(params: Option<&str>) -> CliResult<Value> {
    let Some(raw) = params else {
        return Ok(Value::Object(Map::new()));
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(other) => Err(CliError::InvalidParams {
            message: format!("expected a JSON object, got {}", other),
        }),
        Err(e) => Err(CliError::InvalidParams {
            message: e.to_string(),
        }),
    }
}

/// Text results print as-is, everything else as pretty JSON.
pub fn render_result(result: &Value) -> CliResult<String> {
    match result {
        Value::String(text) => Ok(text.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}

/// Rounded borders for every table the CLI prints.
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
