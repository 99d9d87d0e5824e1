//! Property access over JSON values
//!
//! Objects expose their own keys; arrays expose their elements under
//! zero-based index names. Scalars and null have no properties.

use serde_json::Value;

static NULL: Value = Value::Null;

/// Enumerate the own entries of a value, in their stored order
pub fn get_properties(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(key, item)| (key.clone(), item)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        _ => Vec::new(),
    }
}

/// Read one named property, or `Value::Null` when it does not exist
///
/// Object keys match exactly (case-sensitive). On arrays the name must
/// parse as an index.
pub fn get_property<'a>(value: &'a Value, name: &str) -> &'a Value {
    match value {
        Value::Object(map) => map.get(name).unwrap_or(&NULL),
        Value::Array(items) => name
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index))
            .unwrap_or(&NULL),
        _ => &NULL,
    }
}

/// Check whether a named property exists and is not null
pub fn has_property(value: &Value, name: &str) -> bool {
    !get_property(value, name).is_null()
}
