//! Common utilities for output formatters

use serde_json::Value;

use crate::error::{ArkIdError, Result};

/// Render a body as pretty-printed JSON
pub fn render_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a body as YAML
pub fn render_yaml(value: &Value) -> Result<String> {
    serde_yml::to_string(value).map_err(|e| ArkIdError::Json(format!("YAML error: {}", e)))
}

/// Text for one table cell
///
/// Strings are shown bare, null as empty, nested values as compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
