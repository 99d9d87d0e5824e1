//! Comparison between two properties of the same value
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::ValidationRule;
use crate::validation::base::{display_name, SchemaValidator};
use crate::validation::comparator::ObjectComparator;
use crate::validation::result::ValidationResult;
use conform_core::reader;
use serde_json::Value;

/// Compares two named properties of the value with a comparison operation
///
/// Absent properties read as null, so ordering against a missing property
/// never holds.
#[derive(Debug, Clone)]
pub struct PropertiesComparisonRule {
    property1: String,
    operation: String,
    property2: String,
}

impl PropertiesComparisonRule {
    pub fn new<P1, O, P2>(property1: P1, operation: O, property2: P2) -> Self
    where
        P1: Into<String>,
        O: Into<String>,
        P2: Into<String>,
    {
        Self {
            property1: property1.into(),
            operation: operation.into(),
            property2: property2.into(),
        }
    }
}

impl ValidationRule for PropertiesComparisonRule {
    fn validate(
        &self,
        path: &str,
        _schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        let value1 = reader::get_property(value, &self.property1);
        let value2 = reader::get_property(value, &self.property2);

        if !ObjectComparator::compare(value1, &self.operation, value2) {
            results.push(
                ValidationResult::error(
                    path,
                    "PROPERTIES_NOT_MATCH",
                    format!(
                        "{} must have {} {} {}",
                        display_name(path),
                        self.property1,
                        self.operation,
                        self.property2
                    ),
                )
                .with_expected(value2.clone())
                .with_actual(value1.clone()),
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
    fn test_matching_properties_pass() {
        let rule = PropertiesComparisonRule::new("min", "<=", "max");
        let mut results = Vec::new();
        rule.validate("", &Schema::new(), &json!({"min": 1, "max": 3}), &mut results);
        rule.validate("", &Schema::new(), &json!({"min": 3, "max": "3"}), &mut results);
        assert!(results.is_empty());
    }

    #[test]
    fn test_mismatch_reported() {
        let rule = PropertiesComparisonRule::new("password", "EQ", "confirmation");
        let mut results = Vec::new();
        rule.validate(
            "form",
            &Schema::new(),
            &json!({"password": "a", "confirmation": "b"}),
            &mut results,
        );

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "PROPERTIES_NOT_MATCH");
        assert_eq!(results[0].message(), "form must have password EQ confirmation");
        assert_eq!(results[0].expected(), Some(&json!("b")));
        assert_eq!(results[0].actual(), Some(&json!("a")));
    }

    #[test]
    fn test_missing_property_fails_ordering() {
        let rule = PropertiesComparisonRule::new("start", "<", "end");
        let mut results = Vec::new();
        rule.validate("", &Schema::new(), &json!({"start": 1}), &mut results);
        assert_eq!(results.len(), 1);
    }
}
