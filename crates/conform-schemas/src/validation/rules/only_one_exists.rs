//! Presence of exactly one of several properties
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::{join_names, ValidationRule};
use crate::validation::base::{display_name, SchemaValidator};
use crate::validation::result::ValidationResult;
use conform_core::reader;
use serde_json::Value;

/// Requires exactly one of the named properties to be non-null
///
/// None present is reported as `VALUE_NULL`, several as `VALUE_ONLY_ONE`.
#[derive(Debug, Clone)]
pub struct OnlyOneExistsRule {
    properties: Vec<String>,
}

impl OnlyOneExistsRule {
    pub fn new<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }
}

impl ValidationRule for OnlyOneExistsRule {
    fn validate(
        &self,
        path: &str,
        _schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        let found: Vec<&String> = self
            .properties
            .iter()
            .filter(|property| reader::has_property(value, property))
            .collect();

        let (code, requirement) = match found.len() {
            1 => return,
            0 => ("VALUE_NULL", "at least one"),
            _ => ("VALUE_ONLY_ONE", "only one"),
        };

        results.push(
            ValidationResult::error(
                path,
                code,
                format!(
                    "{} must have {} property from {}",
                    display_name(path),
                    requirement,
                    join_names(&self.properties)
                ),
            )
            .with_expected(Value::from(self.properties.clone()))
            .with_actual(Value::from(found.into_iter().cloned().collect::<Vec<String>>())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::base::Schema;
    use serde_json::json;

    fn run(value: Value) -> Vec<ValidationResult> {
        let rule = OnlyOneExistsRule::new(["id", "key"]);
        let mut results = Vec::new();
        rule.validate("", &Schema::new(), &value, &mut results);
        results
    }

    #[test]
    fn test_exactly_one_passes() {
        assert!(run(json!({"id": 1})).is_empty());
        assert!(run(json!({"key": "k", "id": null})).is_empty());
    }

    #[test]
    fn test_none_present() {
        let results = run(json!({}));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_NULL");
        assert_eq!(results[0].message(), "value must have at least one property from id, key");
    }

    #[test]
    fn test_several_present() {
        let results = run(json!({"id": 1, "key": "k"}));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_ONLY_ONE");
        assert_eq!(results[0].message(), "value must have only one property from id, key");
        assert_eq!(results[0].actual(), Some(&json!(["id", "key"])));
    }
}
