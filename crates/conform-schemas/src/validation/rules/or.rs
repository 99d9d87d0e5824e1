//! Disjunction of rules
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::ValidationRule;
use crate::validation::base::SchemaValidator;
use crate::validation::result::ValidationResult;
use serde_json::Value;
use std::sync::Arc;

/// Passes as soon as one child rule reports nothing
///
/// Children validate into a local scratch sequence. A child "passes" when
/// the scratch sequence did not grow while it ran; the rule then returns
/// without reporting anything. When every child reports something, the
/// findings of all children are appended in child order.
///
/// The pass check compares scratch lengths before and after each child, so
/// a child that removed entries from the sequence it was given would be
/// misjudged. No built-in rule does that.
#[derive(Debug, Clone, Default)]
pub struct OrRule {
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl OrRule {
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

impl ValidationRule for OrRule {
    fn validate(
        &self,
        path: &str,
        schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        if self.rules.is_empty() {
            return;
        }

        let mut local_results = Vec::new();
        for rule in &self.rules {
            let count = local_results.len();
            rule.validate(path, schema, value, &mut local_results);
            if local_results.len() == count {
                return;
            }
        }

        results.extend(local_results);
    }
}
