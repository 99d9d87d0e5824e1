//! Comparison of the value against a constant
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::ValidationRule;
use crate::validation::base::{display_name, SchemaValidator};
use crate::validation::comparator::ObjectComparator;
use crate::validation::result::ValidationResult;
use conform_core::convert;
use serde_json::Value;

/// Compares the value with a constant, e.g. `value > 0` or `value LIKE ^\d+$`
#[derive(Debug, Clone)]
pub struct ValueComparisonRule {
    operation: String,
    value: Value,
}

impl ValueComparisonRule {
    pub fn new<O: Into<String>>(operation: O, value: Value) -> Self {
        Self {
            operation: operation.into(),
            value,
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl ValidationRule for ValueComparisonRule {
    fn validate(
        &self,
        path: &str,
        _schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        if !ObjectComparator::compare(value, &self.operation, &self.value) {
            results.push(
                ValidationResult::error(
                    path,
                    "VALUE_NOT_MATCH",
                    format!(
                        "{} must {} {} but found {}",
                        display_name(path),
                        self.operation,
                        convert::to_string_or(&self.value, "null"),
                        convert::to_string_or(value, "null")
                    ),
                )
                .with_expected(self.value.clone())
                .with_actual(value.clone()),
            );
        }
    }
}
