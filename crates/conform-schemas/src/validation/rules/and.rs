//! Conjunction of rules
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::ValidationRule;
use crate::validation::base::SchemaValidator;
use crate::validation::result::ValidationResult;
use serde_json::Value;
use std::sync::Arc;

/// Runs every child rule, in order, against the same value
///
/// The value passes only when no child reports an error; children choose
/// the severity of their own findings.
#[derive(Debug, Clone, Default)]
pub struct AndRule {
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl AndRule {
    pub fn new(rules: Vec<Arc<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Append a child rule
    pub fn with_rule<R: ValidationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn rules(&self) -> &[Arc<dyn ValidationRule>] {
        &self.rules
    }
}

impl ValidationRule for AndRule {
    fn validate(
        &self,
        path: &str,
        schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        for rule in &self.rules {
            rule.validate(path, schema, value, results);
        }
    }
}
