//! Table output formatter

use comfy_table::{presets::NOTHING, Table};
use serde_json::Value;

use super::common::cell_text;
use crate::arkid::list_items;

/// Columns shown first when present, in this order
const LEADING_COLUMNS: &[&str] = &["oid", "username", "name", "key"];

/// Render a body as a table
///
/// List bodies become one row per item with a column per scalar field.
/// Object bodies become a two-column field/value table.
pub fn render_table(value: &Value) -> String {
    if let Some(items) = list_items(value) {
        return render_rows(items);
    }

    match value {
        Value::Object(map) => {
            let mut table = Table::new();
            table.load_preset(NOTHING).set_header(vec!["Field", "Value"]);
            for (key, field) in map {
                table.add_row(vec![key.clone(), cell_text(field)]);
            }
            table.to_string()
        }
        other => cell_text(other),
    }
}

fn render_rows(items: &[Value]) -> String {
    let columns = scalar_columns(items);

    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(columns.clone());

    for item in items {
        let row: Vec<String> = columns
            .iter()
            .map(|col| item.get(col.as_str()).map(cell_text).unwrap_or_default())
            .collect();
        table.add_row(row);
    }

    table.to_string()
}

/// Scalar field names across all items, leading columns first
fn scalar_columns(items: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();

    for item in items {
        let Some(map) = item.as_object() else {
            continue;
        };
        for (key, value) in map {
            if !(value.is_object() || value.is_array()) && !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    columns.sort_by_key(|col| {
        LEADING_COLUMNS
            .iter()
            .position(|lead| *lead == col.as_str())
            .unwrap_or(LEADING_COLUMNS.len())
    });
    columns
}
