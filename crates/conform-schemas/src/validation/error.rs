//! Validation exception aggregating a sequence of findings
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::validation::result::{ValidationResult, ValidationResultType};
use conform_core::{ApplicationError, ErrorCategory};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Error code carried by every validation exception
pub const INVALID_DATA: &str = "INVALID_DATA";

/// A structured failure built from a completed sequence of findings
///
/// The message lists every failing finding so a caller sees all problems
/// in the value tree at once rather than just the first.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationException {
    #[serde(flatten)]
    error: ApplicationError,
    results: Vec<ValidationResult>,
}

impl fmt::Display for ValidationException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ValidationException {
    /// Create an exception wrapping all of the given findings
    pub fn new(correlation_id: Option<&str>, results: Vec<ValidationResult>) -> Self {
        let message = Self::compose_message(&results);
        Self::with_message(correlation_id, message, results)
    }

    /// Create an exception with an explicit message
    pub fn with_message<M: Into<String>>(
        correlation_id: Option<&str>,
        message: M,
        results: Vec<ValidationResult>,
    ) -> Self {
        Self {
            error: ApplicationError::new(ErrorCategory::BadRequest, correlation_id, INVALID_DATA, message),
            results,
        }
    }

    /// Compose `Validation failed: m1, m2, ...` from the failing findings
    ///
    /// Information-level findings are left out of the message.
    pub fn compose_message(results: &[ValidationResult]) -> String {
        let messages: Vec<&str> = results
            .iter()
            .filter(|result| result.result_type() != ValidationResultType::Information)
            .map(ValidationResult::message)
            .collect();

        if messages.is_empty() {
            "Validation failed".to_string()
        } else {
            format!("Validation failed: {}", messages.join(", "))
        }
    }

    /// Build an exception only if the findings fail under the given policy
    ///
    /// Errors always fail, warnings fail only when `strict`, information
    /// never fails. All findings are kept in the exception, not only the
    /// failing ones.
    pub fn from_results(
        correlation_id: Option<&str>,
        results: Vec<ValidationResult>,
        strict: bool,
    ) -> Option<Self> {
        let failed = results.iter().any(|result| result.result_type().is_failure(strict));
        if !failed {
            return None;
        }

        tracing::debug!(
            correlation_id = correlation_id.unwrap_or_default(),
            findings = results.len(),
            strict,
            "validation failed"
        );
        Some(Self::new(correlation_id, results))
    }

    /// Return an error if the findings fail under the given policy
    pub fn throw_exception_if_needed(
        correlation_id: Option<&str>,
        results: Vec<ValidationResult>,
        strict: bool,
    ) -> Result<(), Self> {
        match Self::from_results(correlation_id, results, strict) {
            Some(exception) => Err(exception),
            None => Ok(()),
        }
    }

    /// Attach a detail entry
    pub fn with_details<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.error = self.error.with_details(key, value);
        self
    }

    /// The findings this exception was built from, in their original order
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Consume the exception and return its findings
    pub fn into_results(self) -> Vec<ValidationResult> {
        self.results
    }

    pub fn category(&self) -> ErrorCategory {
        self.error.category
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.error.correlation_id.as_deref()
    }

    pub fn code(&self) -> &str {
        &self.error.code
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }

    pub fn status(&self) -> u16 {
        self.error.status
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.error.details
    }

    /// The underlying structured error record
    pub fn as_application_error(&self) -> &ApplicationError {
        &self.error
    }
}

impl From<ValidationException> for ApplicationError {
    fn from(exception: ValidationException) -> Self {
        exception.error
    }
}
