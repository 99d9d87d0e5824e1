//! Schema for one named property of an object
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{child_path, impl_schema_builders, Schema, SchemaValidator};
use crate::validation::result::ValidationResult;
use crate::validation::types::TypeDescriptor;
use serde_json::Value;

/// Validates a named property: required/rule checks plus a type check,
/// both reported at `parent.name`
#[derive(Debug, Clone)]
pub struct PropertySchema {
    base: Schema,
    name: String,
    type_descriptor: Option<TypeDescriptor>,
}

impl PropertySchema {
    /// Create an optional, untyped property schema
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            base: Schema::new(),
            name: name.into(),
            type_descriptor: None,
        }
    }

    /// Declare the expected type of the property
    pub fn with_type<T: Into<TypeDescriptor>>(mut self, type_descriptor: T) -> Self {
        self.type_descriptor = Some(type_descriptor.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }

    /// Declared type, `None` when the property is untyped
    pub fn type_descriptor(&self) -> Option<&TypeDescriptor> {
        self.type_descriptor.as_ref()
    }

    pub fn set_type(&mut self, type_descriptor: Option<TypeDescriptor>) {
        self.type_descriptor = type_descriptor;
    }
}

impl_schema_builders!(PropertySchema);

impl SchemaValidator for PropertySchema {
    fn schema(&self) -> &Schema {
        &self.base
    }

    /// `path` is the path of the enclosing object
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        let path = child_path(path, &self.name);
        self.base.validate_value(self, &path, value, results);
        Schema::perform_type_validation(&path, self.type_descriptor.as_ref(), value, results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::ValueComparisonRule;
    use crate::validation::types::TypeCode;
    use serde_json::json;

    #[test]
    fn test_property_path() {
        let schema = PropertySchema::new("city").make_required();

        let mut results = Vec::new();
        schema.perform_validation("address", &Value::Null, &mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path(), "address.city");
        assert_eq!(results[0].message(), "address.city must not be null");

        results.clear();
        schema.perform_validation("", &Value::Null, &mut results);
        assert_eq!(results[0].path(), "city");
    }

    #[test]
    fn test_rules_and_type_both_checked() {
        let schema = PropertySchema::new("age")
            .with_type(TypeCode::Integer)
            .with_rule(ValueComparisonRule::new(">", json!(0)));

        let mut results = Vec::new();
        schema.perform_validation("", &json!(-1.5), &mut results);
        let codes: Vec<&str> = results.iter().map(ValidationResult::code).collect();
        assert_eq!(codes, vec!["VALUE_NOT_MATCH", "TYPE_MISMATCH"]);
        assert!(results.iter().all(|r| r.path() == "age"));
    }

    #[test]
    fn test_untyped_optional_property() {
        let schema = PropertySchema::new("anything");
        let mut results = Vec::new();
        schema.perform_validation("", &Value::Null, &mut results);
        schema.perform_validation("", &json!([1, "a"]), &mut results);
        assert!(results.is_empty());
        assert!(schema.type_descriptor().is_none());
    }
}
