//! Presence of at least one of several properties
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::{join_names, ValidationRule};
use crate::validation::base::{display_name, SchemaValidator};
use crate::validation::result::ValidationResult;
use conform_core::reader;
use serde_json::Value;

/// Requires at least one of the named properties to be non-null
#[derive(Debug, Clone)]
pub struct AtLeastOneExistsRule {
    properties: Vec<String>,
}

impl AtLeastOneExistsRule {
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

impl ValidationRule for AtLeastOneExistsRule {
    fn validate(
        &self,
        path: &str,
        _schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        let found = self
            .properties
            .iter()
            .any(|property| reader::has_property(value, property));

        if !found {
            results.push(
                ValidationResult::error(
                    path,
                    "VALUE_NULL",
                    format!(
                        "{} must have at least one property from {}",
                        display_name(path),
                        join_names(&self.properties)
                    ),
                )
                .with_expected(Value::from(self.properties.clone())),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::base::Schema;
    use serde_json::json;

    #[test]
    fn test_one_present_passes() {
        let rule = AtLeastOneExistsRule::new(["email", "phone"]);
        let mut results = Vec::new();
        rule.validate("", &Schema::new(), &json!({"phone": "555"}), &mut results);
        rule.validate("", &Schema::new(), &json!({"phone": "555", "email": "a@b"}), &mut results);
        assert!(results.is_empty());
    }

    #[test]
    fn test_none_present_reported() {
        let rule = AtLeastOneExistsRule::new(["email", "phone"]);
        let mut results = Vec::new();
        rule.validate("contact", &Schema::new(), &json!({"email": null, "name": "x"}), &mut results);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_NULL");
        assert_eq!(
            results[0].message(),
            "contact must have at least one property from email, phone"
        );
        assert_eq!(results[0].expected(), Some(&json!(["email", "phone"])));
    }
}
