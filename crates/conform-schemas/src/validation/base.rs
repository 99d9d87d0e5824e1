//! Base schema trait, the plain schema and path helpers
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::ValidationException;
use crate::validation::result::ValidationResult;
use crate::validation::rules::ValidationRule;
use crate::validation::types::{TypeDescriptor, TypeMatcher};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Extend a dot-notation path with one segment
pub fn child_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", path, segment)
    }
}

/// Name used for a path in messages: the path itself, or `value` for the root
pub fn display_name(path: &str) -> &str {
    if path.is_empty() {
        "value"
    } else {
        path
    }
}

/// Common behavior of every schema kind
///
/// Implementors only decide how one value at one path is checked; the
/// public entry points (`validate` and the exception variants) are shared.
/// A schema never stores the value it validates, so one instance can be
/// reused across concurrent calls.
pub trait SchemaValidator: fmt::Debug + Send + Sync {
    /// The required flag and rules shared by every schema kind
    fn schema(&self) -> &Schema;

    /// Validate `value` located at `path`, appending findings to `results`
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>);

    fn is_required(&self) -> bool {
        self.schema().is_required()
    }

    fn rules(&self) -> &[Arc<dyn ValidationRule>] {
        self.schema().rules()
    }

    /// Validate a root value and return every finding
    fn validate(&self, value: &Value) -> Vec<ValidationResult> {
        let mut results = Vec::new();
        self.perform_validation("", value, &mut results);
        tracing::debug!(findings = results.len(), "validated value");
        results
    }

    /// Validate a root value and wrap failing findings into an exception
    ///
    /// Returns `None` when nothing fails. Warnings fail only when `strict`.
    fn validate_and_return_exception(
        &self,
        correlation_id: Option<&str>,
        value: &Value,
        strict: bool,
    ) -> Option<ValidationException> {
        let results = self.validate(value);
        ValidationException::from_results(correlation_id, results, strict)
    }

    /// Validate a root value and fail with an exception if needed
    fn validate_and_throw_exception(
        &self,
        correlation_id: Option<&str>,
        value: &Value,
        strict: bool,
    ) -> Result<(), ValidationException> {
        match self.validate_and_return_exception(correlation_id, value, strict) {
            Some(exception) => Err(exception),
            None => Ok(()),
        }
    }
}

/// A plain schema: a required flag plus an ordered list of rules
///
/// The other schema kinds embed one of these and add structural checks.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    required: bool,
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl Schema {
    /// Create an optional schema without rules
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make_required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn make_optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Append a rule
    pub fn with_rule<R: ValidationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Append a rule that is shared with other schemas
    pub fn with_shared_rule(mut self, rule: Arc<dyn ValidationRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn rules(&self) -> &[Arc<dyn ValidationRule>] {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: Vec<Arc<dyn ValidationRule>>) {
        self.rules = rules;
    }

    /// Run the null check and every rule on behalf of `owner`
    ///
    /// A null value is reported when required and then skips the rules.
    /// Rules never short-circuit each other.
    pub fn validate_value(
        &self,
        owner: &dyn SchemaValidator,
        path: &str,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        if value.is_null() {
            if self.required {
                results.push(ValidationResult::error(
                    path,
                    "VALUE_IS_NULL",
                    format!("{} must not be null", display_name(path)),
                ));
            }
            return;
        }

        for rule in &self.rules {
            rule.validate(path, owner, value, results);
        }
    }

    /// Check a value against a declared type
    ///
    /// Untyped slots and null values pass. A nested schema takes over the
    /// whole validation of the value at the same path.
    pub fn perform_type_validation(
        path: &str,
        type_descriptor: Option<&TypeDescriptor>,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        let Some(type_descriptor) = type_descriptor else {
            return;
        };
        if value.is_null() {
            return;
        }

        if let TypeDescriptor::Nested(schema) = type_descriptor {
            schema.perform_validation(path, value, results);
            return;
        }

        if !TypeMatcher::match_descriptor(type_descriptor, value) {
            let actual = TypeMatcher::type_of(value);
            results.push(
                ValidationResult::error(
                    path,
                    "TYPE_MISMATCH",
                    format!(
                        "{} type must be {} but found {}",
                        display_name(path),
                        type_descriptor,
                        actual
                    ),
                )
                .with_expected(Value::String(type_descriptor.to_string()))
                .with_actual(Value::String(actual.to_string())),
            );
        }
    }
}

impl SchemaValidator for Schema {
    fn schema(&self) -> &Schema {
        self
    }

    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.validate_value(self, path, value, results);
    }
}

impl From<Schema> for TypeDescriptor {
    fn from(schema: Schema) -> Self {
        TypeDescriptor::nested(schema)
    }
}

/// Fluent required/rule builders for schema kinds embedding a [`Schema`] as `base`
macro_rules! impl_schema_builders {
    ($schema:ty) => {
        impl $schema {
            pub fn make_required(mut self) -> Self {
                self.base = self.base.make_required();
                self
            }

            pub fn make_optional(mut self) -> Self {
                self.base = self.base.make_optional();
                self
            }

            /// Append a rule
            pub fn with_rule<R: $crate::validation::rules::ValidationRule + 'static>(mut self, rule: R) -> Self {
                self.base = self.base.with_rule(rule);
                self
            }

            /// Append a rule that is shared with other schemas
            pub fn with_shared_rule(
                mut self,
                rule: std::sync::Arc<dyn $crate::validation::rules::ValidationRule>,
            ) -> Self {
                self.base = self.base.with_shared_rule(rule);
                self
            }
        }

        impl From<$schema> for $crate::validation::types::TypeDescriptor {
            fn from(schema: $schema) -> Self {
                $crate::validation::types::TypeDescriptor::nested(schema)
            }
        }
    };
}

pub(crate) use impl_schema_builders;
