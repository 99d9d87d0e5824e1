//! Validation module: schemas, rules and findings
//!
//! A schema describes the expected shape of a dynamically-typed value and
//! produces a list of findings for any input instead of stopping at the
//! first problem. Callers choose how to act on the findings:
//!
//! - **Collect**: `validate` returns every finding
//! - **Lenient**: only errors turn into a [`ValidationException`]
//! - **Strict**: errors and warnings turn into a [`ValidationException`]
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

pub mod array_schema;
pub mod base;
pub mod comparator;
pub mod error;
pub mod map_schema;
pub mod object_schema;
pub mod presets;
pub mod property_schema;
pub mod result;
pub mod rules;
pub mod types;

// Re-export commonly used types
pub use array_schema::ArraySchema;
pub use base::{Schema, SchemaValidator};
pub use comparator::{CompareOperation, ObjectComparator};
pub use error::ValidationException;
pub use map_schema::MapSchema;
pub use object_schema::ObjectSchema;
pub use property_schema::PropertySchema;
pub use result::{ValidationResult, ValidationResultType};
pub use rules::ValidationRule;
pub use types::{TypeCode, TypeDescriptor, TypeMatcher};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Validation configuration for exception and batch operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Whether warnings fail validation as well as errors
    pub strict: bool,
    /// Whether batch validation stops at the first failing value
    pub fail_fast: bool,
    /// Maximum number of findings to collect (0 = unlimited)
    pub max_errors: usize,
    /// Correlation id attached to raised exceptions
    pub correlation_id: Option<String>,
}

impl ValidationConfig {
    /// Create a configuration where warnings fail validation
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Create a configuration where only errors fail validation
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of findings to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Set the correlation id carried by raised exceptions
    pub fn with_correlation_id<S: Into<String>>(mut self, correlation_id: S) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> conform_core::Result<Self> {
        serde_json::from_str(text).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse JSON validation config");
            conform_core::Error::configuration(format!("Invalid JSON validation config: {}", e), e)
        })
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(text: &str) -> conform_core::Result<Self> {
        serde_yaml::from_str(text).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse YAML validation config");
            conform_core::Error::configuration(format!("Invalid YAML validation config: {}", e), e)
        })
    }

    /// Load a configuration file
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> conform_core::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            Self::from_yaml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }
}

/// Validate one value and apply the configured failure policy
pub fn validate_with_config(
    schema: &dyn SchemaValidator,
    value: &Value,
    config: &ValidationConfig,
) -> Result<(), ValidationException> {
    let mut results = schema.validate(value);
    if config.max_errors > 0 {
        results.truncate(config.max_errors);
    }
    ValidationException::throw_exception_if_needed(config.correlation_id.as_deref(), results, config.strict)
}

/// Batch validation of several values against one schema
///
/// Each value is validated with its index as the root path, so findings
/// read `0.name`, `1.name` and so on.
pub fn validate_batch(
    schema: &dyn SchemaValidator,
    values: &[Value],
    config: &ValidationConfig,
) -> Result<(), ValidationException> {
    let mut results = Vec::new();

    for (i, value) in values.iter().enumerate() {
        let mut value_results = Vec::new();
        schema.perform_validation(&i.to_string(), value, &mut value_results);

        let failed = value_results
            .iter()
            .any(|result| result.result_type().is_failure(config.strict));
        results.extend(value_results);

        if config.max_errors > 0 && results.len() >= config.max_errors {
            results.truncate(config.max_errors);
            break;
        }

        if failed && config.fail_fast {
            break;
        }
    }

    tracing::debug!(values = values.len(), findings = results.len(), "validated batch");
    ValidationException::throw_exception_if_needed(config.correlation_id.as_deref(), results, config.strict)
}
