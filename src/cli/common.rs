//! Common CLI types shared across commands

use clap::ValueEnum;
use serde_json::Value;

use crate::error::{ArkIdError, Result};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parse a `--data` argument into a JSON object
///
/// Only the top-level shape is checked; field contents are the server's
/// business.
pub fn parse_json_data(data: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(data)
        .map_err(|e| ArkIdError::Config(format!("--data is not valid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(ArkIdError::Config(
            "--data must be a JSON object, e.g. '{\"name\": \"example\"}'".to_string(),
        ));
    }
    Ok(value)
}
