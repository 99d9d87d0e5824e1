//! Exclusion from a set of forbidden values
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::ValidationRule;
use crate::validation::base::{display_name, SchemaValidator};
use crate::validation::comparator::ObjectComparator;
use crate::validation::result::ValidationResult;
use serde_json::Value;

/// Requires the value to equal none of the configured values
#[derive(Debug, Clone)]
pub struct ExcludedRule {
    values: Vec<Value>,
}

impl ExcludedRule {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl ValidationRule for ExcludedRule {
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

        if found {
            let forbidden = Value::Array(self.values.clone());
            results.push(
                ValidationResult::error(
                    path,
                    "VALUE_INCLUDED",
                    format!("{} must not be one of {}", display_name(path), forbidden),
                )
                .with_expected(forbidden)
                .with_actual(value.clone()),
            );
        }
    }
}
