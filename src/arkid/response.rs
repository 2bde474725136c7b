//! Response wrapper returned by every ArkID API call

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ArkIdError, Result};

static NULL: Value = Value::Null;

/// Parsed body of a successful ArkID response
///
/// Bodies are kept untyped; fields are server-defined and passed through.
/// Indexing with a missing key yields `Value::Null` instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct ArkIdResponse {
    status: u16,
    data: Value,
}

impl ArkIdResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    /// Build a response from raw body text
    ///
    /// Empty bodies (e.g. `204 No Content`) become `Value::Null`; a body that is
    /// not JSON is kept as a JSON string.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        let data = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
        };
        Self::new(status, data)
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whole parsed body
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    /// Top-level field of an object body
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Items of a list body
    ///
    /// Paginated bodies carry their items under `results`; plain list bodies
    /// are top-level arrays. Anything else has no items.
    pub fn items(&self) -> &[Value] {
        list_items(&self.data).unwrap_or(&[])
    }

    /// Deserialize the body into a caller-chosen type
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            ArkIdError::Json(format!("Failed to parse response body: {}", e))
        })
    }
}

/// Items of a list body, or `None` if the body is not a list
pub(crate) fn list_items(data: &Value) -> Option<&[Value]> {
    match data {
        Value::Array(items) => Some(items.as_slice()),
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => Some(items.as_slice()),
            _ => None,
        },
        _ => None,
    }
}

impl std::ops::Index<&str> for ArkIdResponse {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.data.get(key).unwrap_or(&NULL)
    }
}
