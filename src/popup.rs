//! Attribute panel shown when a marker is clicked.

use serde_json::Value;

use crate::feature::Properties;

/// Text shown for a property value. Every scalar renders as plain text,
/// nested values as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// One `(key, text)` row per property, in the map's stable order.
pub fn attribute_entries(properties: &Properties) -> Vec<(String, String)> {
    properties
        .iter()
        .map(|(key, value)| (key.clone(), display_value(value)))
        .collect()
}
