//! Composable validation rules
//!
//! A rule is a single predicate attached to a schema. It inspects the value
//! at one path and appends zero or more findings; it never decides whether
//! validation as a whole fails.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

pub mod and;
pub mod at_least_one_exists;
pub mod excluded;
pub mod included;
pub mod not;
pub mod only_one_exists;
pub mod or;
pub mod properties_comparison;
pub mod value_comparison;

pub use and::AndRule;
pub use at_least_one_exists::AtLeastOneExistsRule;
pub use excluded::ExcludedRule;
pub use included::IncludedRule;
pub use not::NotRule;
pub use only_one_exists::OnlyOneExistsRule;
pub use or::OrRule;
pub use properties_comparison::PropertiesComparisonRule;
pub use value_comparison::ValueComparisonRule;

use crate::validation::base::SchemaValidator;
use crate::validation::result::ValidationResult;
use serde_json::Value;
use std::fmt;

/// A single predicate evaluated against the value being validated
///
/// Rules hold only the configuration captured at construction and are
/// safe to share between schemas and threads.
pub trait ValidationRule: fmt::Debug + Send + Sync {
    /// Check `value` at `path` on behalf of `schema`, appending findings to `results`
    fn validate(
        &self,
        path: &str,
        schema: &dyn SchemaValidator,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    );
}

/// Render a list of names for messages
pub(crate) fn join_names(names: &[String]) -> String {
    names.join(", ")
}
