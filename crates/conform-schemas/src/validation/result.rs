//! Validation findings
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Severity of a single finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValidationResultType {
    /// Annotation only, never causes a failure
    Information,
    /// Causes a failure in strict mode only
    Warning,
    /// Always causes a failure
    Error,
}

impl ValidationResultType {
    /// Whether a finding of this severity fails validation under the given policy
    pub fn is_failure(&self, strict: bool) -> bool {
        match self {
            ValidationResultType::Information => false,
            ValidationResultType::Warning => strict,
            ValidationResultType::Error => true,
        }
    }
}

impl fmt::Display for ValidationResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResultType::Information => write!(f, "information"),
            ValidationResultType::Warning => write!(f, "warning"),
            ValidationResultType::Error => write!(f, "error"),
        }
    }
}

/// One finding produced while validating a value
///
/// Results are immutable once built; validators only ever append new ones
/// to the sequence threaded through a validation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    path: String,
    #[serde(rename = "type")]
    result_type: ValidationResultType,
    code: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actual: Option<Value>,
}

impl ValidationResult {
    /// Create a new finding
    pub fn new<P, C, M>(
        path: P,
        result_type: ValidationResultType,
        code: C,
        message: M,
        expected: Option<Value>,
        actual: Option<Value>,
    ) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            result_type,
            code: code.into(),
            message: message.into(),
            expected,
            actual,
        }
    }

    /// Create an error-level finding
    pub fn error<P, C, M>(path: P, code: C, message: M) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self::new(path, ValidationResultType::Error, code, message, None, None)
    }

    /// Create a warning-level finding
    pub fn warning<P, C, M>(path: P, code: C, message: M) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self::new(path, ValidationResultType::Warning, code, message, None, None)
    }

    /// Create an information-level finding
    pub fn information<P, C, M>(path: P, code: C, message: M) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self::new(path, ValidationResultType::Information, code, message, None, None)
    }

    /// Attach the expected value
    pub fn with_expected(mut self, expected: Value) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Attach the actual value
    pub fn with_actual(mut self, actual: Value) -> Self {
        self.actual = Some(actual);
        self
    }

    /// Dot-notation location of the offending value, empty for the root
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn result_type(&self) -> ValidationResultType {
        self.result_type
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expected(&self) -> Option<&Value> {
        self.expected.as_ref()
    }

    pub fn actual(&self) -> Option<&Value> {
        self.actual.as_ref()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "$" } else { &self.path };
        write!(f, "[{}] {} at '{}': {}", self.result_type, self.code, path, self.message)
    }
}
