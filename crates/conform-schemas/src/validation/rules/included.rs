//! Membership in a set of allowed values
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::ValidationRule;
use crate::validation::base::{display_name, SchemaValidator};
use crate::validation::comparator::ObjectComparator;
use crate::validation::result::ValidationResult;
use serde_json::Value;

/// Requires the value to equal at least one of the configured values
///
/// Equality follows [`ObjectComparator::are_equal`], so `5` matches `"5"`.
#[derive(Debug, Clone)]
pub struct IncludedRule {
    values: Vec<Value>,
}

impl IncludedRule {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl ValidationRule for IncludedRule {
    fn validate(
        &self,
        path: &str,
        _schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        let found = self
            .values
            .iter()
            .any(|candidate| ObjectComparator::are_equal(value, candidate));

        if !found {
            let expected = Value::Array(self.values.clone());
            results.push(
                ValidationResult::error(
                    path,
                    "VALUE_NOT_INCLUDED",
                    format!("{} must be one of {}", display_name(path), expected),
                )
                .with_expected(expected)
                .with_actual(value.clone()),
            );
        }
    }
}
