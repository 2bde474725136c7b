//! Output formatting module
//!
//! Handles different output formats: table, JSON, YAML

mod common;
mod table;

use serde_json::Value;

use crate::arkid::ArkIdResponse;
use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::common::{render_json, render_yaml};
pub use self::table::render_table;

/// Render a body in the requested format
pub fn render(value: &Value, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(value)),
        OutputFormat::Json => render_json(value),
        OutputFormat::Yaml => render_yaml(value),
    }
}

/// Print a response body to stdout
pub fn output_response(response: &ArkIdResponse, format: &OutputFormat) -> Result<()> {
    println!("{}", render(response.data(), format)?);
    Ok(())
}
