//! Schema for maps with uniform key and value types
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{display_name, impl_schema_builders, Schema, SchemaValidator};
use crate::validation::result::ValidationResult;
use crate::validation::types::{TypeCode, TypeDescriptor, TypeMatcher};
use serde_json::Value;

/// Validates that a value is a map and that every key and value has the
/// declared type
///
/// JSON object keys are always strings, so keys are checked as string
/// values. Both checks are reported at `path.key`.
#[derive(Debug, Clone, Default)]
pub struct MapSchema {
    base: Schema,
    key_type: Option<TypeDescriptor>,
    value_type: Option<TypeDescriptor>,
}

impl MapSchema {
    /// Create an optional map schema with untyped keys and values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_type<T: Into<TypeDescriptor>>(mut self, key_type: T) -> Self {
        self.key_type = Some(key_type.into());
        self
    }

    pub fn with_value_type<T: Into<TypeDescriptor>>(mut self, value_type: T) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn key_type(&self) -> Option<&TypeDescriptor> {
        self.key_type.as_ref()
    }

    pub fn value_type(&self) -> Option<&TypeDescriptor> {
        self.value_type.as_ref()
    }
}

impl_schema_builders!(MapSchema);

impl SchemaValidator for MapSchema {
    fn schema(&self) -> &Schema {
        &self.base
    }

    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.base.validate_value(self, path, value, results);

        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (key, item) in map {
                    let entry_path = format!("{}.{}", path, key);
                    let key_value = Value::String(key.clone());
                    Schema::perform_type_validation(&entry_path, self.key_type.as_ref(), &key_value, results);
                    Schema::perform_type_validation(&entry_path, self.value_type.as_ref(), item, results);
                }
            }
            _ => {
                results.push(
                    ValidationResult::error(
                        path,
                        "VALUE_ISNOT_MAP",
                        format!("{} must be a map", display_name(path)),
                    )
                    .with_expected(Value::String(TypeCode::Map.to_string()))
                    .with_actual(Value::String(TypeMatcher::type_of(value).to_string())),
                );
            }
        }
    }
}
