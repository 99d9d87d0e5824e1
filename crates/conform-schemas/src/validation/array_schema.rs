//! Schema for arrays with a uniform element type
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{display_name, impl_schema_builders, Schema, SchemaValidator};
use crate::validation::result::ValidationResult;
use crate::validation::types::{TypeCode, TypeDescriptor, TypeMatcher};
use serde_json::Value;

/// Validates that a value is an array and that every element has the
/// declared type
///
/// Elements are reported at `path.index`; for a root array this is `.index`.
#[derive(Debug, Clone, Default)]
pub struct ArraySchema {
    base: Schema,
    value_type: Option<TypeDescriptor>,
}

impl ArraySchema {
    /// Create an optional array schema with untyped elements
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optional array schema with typed elements
    pub fn of<T: Into<TypeDescriptor>>(value_type: T) -> Self {
        Self::new().with_value_type(value_type)
    }

    pub fn with_value_type<T: Into<TypeDescriptor>>(mut self, value_type: T) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn value_type(&self) -> Option<&TypeDescriptor> {
        self.value_type.as_ref()
    }

    pub fn set_value_type(&mut self, value_type: Option<TypeDescriptor>) {
        self.value_type = value_type;
    }
}

impl_schema_builders!(ArraySchema);

impl SchemaValidator for ArraySchema {
    fn schema(&self) -> &Schema {
        &self.base
    }

    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.base.validate_value(self, path, value, results);

        match value {
            Value::Null => {}
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let element_path = format!("{}.{}", path, index);
                    Schema::perform_type_validation(&element_path, self.value_type.as_ref(), item, results);
                }
            }
            _ => {
                results.push(
                    ValidationResult::error(
                        path,
                        "VALUE_ISNOT_ARRAY",
                        format!("{} must be an array", display_name(path)),
                    )
                    .with_expected(Value::String(TypeCode::Array.to_string()))
                    .with_actual(Value::String(TypeMatcher::type_of(value).to_string())),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::object_schema::ObjectSchema;
    use serde_json::json;

    #[test]
    fn test_element_type_mismatch() {
        let schema = ArraySchema::of(TypeCode::Integer);
        let results = schema.validate(&json!([1, "two", 3]));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "TYPE_MISMATCH");
        assert_eq!(results[0].path(), ".1");
    }

    #[test]
    fn test_not_an_array() {
        let schema = ArraySchema::of(TypeCode::Integer);
        let results = schema.validate(&json!({"0": 1}));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_ISNOT_ARRAY");
        assert_eq!(results[0].message(), "value must be an array");
        assert_eq!(results[0].actual(), Some(&json!("Map")));
    }

    #[test]
    fn test_untyped_elements_and_nulls_pass() {
        assert!(ArraySchema::new().validate(&json!([1, "a", null, {}])).is_empty());
        assert!(ArraySchema::of("string").validate(&json!(["a", null])).is_empty());
    }

    #[test]
    fn test_nested_element_schema() {
        let item = ObjectSchema::new().with_required_property("id", TypeCode::Integer, vec![]);
        let schema = ArraySchema::of(item);

        let mut results = Vec::new();
        schema.perform_validation("items", &json!([{"id": 1}, {}]), &mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path(), "items.1.id");
        assert_eq!(results[0].code(), "VALUE_IS_NULL");
    }
}
