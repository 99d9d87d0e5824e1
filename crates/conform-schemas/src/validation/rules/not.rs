//! Negation of a rule
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::ValidationRule;
use crate::validation::base::{display_name, SchemaValidator};
use crate::validation::result::ValidationResult;
use serde_json::Value;
use std::sync::Arc;

/// Fails when the wrapped rule passes, and passes when it fails
#[derive(Debug, Clone)]
pub struct NotRule {
    rule: Arc<dyn ValidationRule>,
}

impl NotRule {
    pub fn new<R: ValidationRule + 'static>(rule: R) -> Self {
        Self { rule: Arc::new(rule) }
    }

    pub fn from_shared(rule: Arc<dyn ValidationRule>) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &Arc<dyn ValidationRule> {
        &self.rule
    }
}

impl ValidationRule for NotRule {
    fn validate(
        &self,
        path: &str,
        schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        let mut local_results = Vec::new();
        self.rule.validate(path, schema, value, &mut local_results);
        if local_results.is_empty() {
            results.push(ValidationResult::error(
                path,
                "NOT_FAILED",
                format!("Negative check for {} failed", display_name(path)),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::base::Schema;
    use crate::validation::rules::ExcludedRule;
    use serde_json::json;

    #[test]
    fn test_not_inverts_passing_rule() {
        let rule = NotRule::new(ExcludedRule::new(vec![json!("admin")]));
        let mut results = Vec::new();
        rule.validate("role", &Schema::new(), &json!("user"), &mut results);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "NOT_FAILED");
        assert_eq!(results[0].path(), "role");
        assert_eq!(results[0].message(), "Negative check for role failed");
    }

    #[test]
    fn test_not_hides_failing_rule() {
        let rule = NotRule::new(ExcludedRule::new(vec![json!("admin")]));
        let mut results = Vec::new();
        rule.validate("role", &Schema::new(), &json!("admin"), &mut results);
        assert!(results.is_empty());
    }
}
