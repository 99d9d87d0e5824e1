//! Schema for objects with named properties
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{child_path, display_name, impl_schema_builders, Schema, SchemaValidator};
use crate::validation::property_schema::PropertySchema;
use crate::validation::result::ValidationResult;
use crate::validation::rules::ValidationRule;
use crate::validation::types::TypeDescriptor;
use conform_core::reader;
use serde_json::Value;
use std::sync::Arc;

/// Validates an object property by property
///
/// Declared properties are matched against the object's own keys by exact,
/// case-sensitive name. A declared property the object lacks is validated
/// as null, so it is reported only when required. Keys no property claims
/// are reported as warnings unless excess properties are allowed.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    base: Schema,
    properties: Vec<PropertySchema>,
    allow_excess_properties: bool,
}

impl ObjectSchema {
    /// Create an optional object schema that rejects undeclared properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow or forbid properties that no property schema declares
    pub fn allow_undefined(mut self, allow: bool) -> Self {
        self.allow_excess_properties = allow;
        self
    }

    /// Append a property schema
    pub fn with_property(mut self, property: PropertySchema) -> Self {
        self.properties.push(property);
        self
    }

    /// Append a required, typed property checked by `rules`
    pub fn with_required_property<N, T>(
        self,
        name: N,
        type_descriptor: T,
        rules: Vec<Arc<dyn ValidationRule>>,
    ) -> Self
    where
        N: Into<String>,
        T: Into<TypeDescriptor>,
    {
        let property = PropertySchema::new(name).with_type(type_descriptor).make_required();
        self.with_property(rules.into_iter().fold(property, PropertySchema::with_shared_rule))
    }

    /// Append an optional, typed property checked by `rules`
    pub fn with_optional_property<N, T>(
        self,
        name: N,
        type_descriptor: T,
        rules: Vec<Arc<dyn ValidationRule>>,
    ) -> Self
    where
        N: Into<String>,
        T: Into<TypeDescriptor>,
    {
        let property = PropertySchema::new(name).with_type(type_descriptor).make_optional();
        self.with_property(rules.into_iter().fold(property, PropertySchema::with_shared_rule))
    }

    pub fn properties(&self) -> &[PropertySchema] {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: Vec<PropertySchema>) {
        self.properties = properties;
    }

    pub fn allow_excess_properties(&self) -> bool {
        self.allow_excess_properties
    }

    /// Same flag as [`ObjectSchema::allow_excess_properties`]
    pub fn is_undefined_allowed(&self) -> bool {
        self.allow_excess_properties
    }
}

impl_schema_builders!(ObjectSchema);

impl SchemaValidator for ObjectSchema {
    fn schema(&self) -> &Schema {
        &self.base
    }

    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.base.validate_value(self, path, value, results);
        if value.is_null() {
            return;
        }

        let mut remaining = reader::get_properties(value);
        for property in &self.properties {
            let position = remaining.iter().position(|(name, _)| name == property.name());
            match position {
                Some(index) => {
                    let (_, item) = remaining.remove(index);
                    tracing::trace!(path, property = property.name(), "validating property");
                    property.perform_validation(path, item, results);
                }
                None => property.perform_validation(path, &Value::Null, results),
            }
        }

        if self.allow_excess_properties {
            return;
        }
        for (name, _) in remaining {
            results.push(
                ValidationResult::warning(
                    child_path(path, &name),
                    "UNEXPECTED_PROPERTY",
                    format!("{} contains unexpected property {}", display_name(path), name),
                )
                .with_actual(Value::String(name)),
            );
        }
    }
}
