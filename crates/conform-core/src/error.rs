//! Error types for the Conform core library
//!
//! This module defines two things: the crate-level [`Error`] enum for ambient
//! failures (configuration loading, IO, parsing), and the structured
//! [`ApplicationError`] record that categorized failures such as
//! validation exceptions are built on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Main error type for Conform operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error caused by `source`
    pub fn configuration<M, E>(message: M, source: E) -> Self
    where
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json {
            message: source.to_string(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            message: source.to_string(),
            source,
        }
    }
}

/// Broad category of a structured failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Unknown or unexpected failure
    Unknown,
    /// Internal fault, usually a programming error
    Internal,
    /// Component or system is misconfigured
    Misconfiguration,
    /// Operation invoked in a state where it is not allowed
    InvalidState,
    /// Remote call did not produce a response
    NoResponse,
    /// Remote call failed
    FailedInvocation,
    /// Caller supplied invalid data
    BadRequest,
    /// Caller is not authorized
    Unauthorized,
    /// Requested object was not found
    NotFound,
    /// Concurrent modification or duplicate
    Conflict,
    /// Operation is not supported
    Unsupported,
}

impl ErrorCategory {
    /// Default HTTP-style status for this category
    pub fn default_status(&self) -> u16 {
        match self {
            ErrorCategory::BadRequest => 400,
            ErrorCategory::Unauthorized => 401,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Conflict => 409,
            ErrorCategory::Unsupported => 501,
            ErrorCategory::NoResponse | ErrorCategory::FailedInvocation => 502,
            _ => 500,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Unknown => write!(f, "Unknown"),
            ErrorCategory::Internal => write!(f, "Internal"),
            ErrorCategory::Misconfiguration => write!(f, "Misconfiguration"),
            ErrorCategory::InvalidState => write!(f, "InvalidState"),
            ErrorCategory::NoResponse => write!(f, "NoResponse"),
            ErrorCategory::FailedInvocation => write!(f, "FailedInvocation"),
            ErrorCategory::BadRequest => write!(f, "BadRequest"),
            ErrorCategory::Unauthorized => write!(f, "Unauthorized"),
            ErrorCategory::NotFound => write!(f, "NotFound"),
            ErrorCategory::Conflict => write!(f, "Conflict"),
            ErrorCategory::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// A structured, categorized failure carrying a code and correlation id
///
/// Specialized failures embed this record and expose it through their own
/// accessors; the record itself is plain data and serializes as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationError {
    /// Broad failure category
    pub category: ErrorCategory,
    /// Opaque tracing token supplied by the caller
    pub correlation_id: Option<String>,
    /// Machine-readable code, upper snake case
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// HTTP-style status
    pub status: u16,
    /// Free-form additional data
    #[serde(default)]
    pub details: Map<String, Value>,
}

impl ApplicationError {
    /// Create a new error record with the category's default status
    pub fn new<C, M>(category: ErrorCategory, correlation_id: Option<&str>, code: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            category,
            correlation_id: correlation_id.map(str::to_string),
            code: code.into(),
            message: message.into(),
            status: category.default_status(),
            details: Map::new(),
        }
    }

    /// Attach a detail entry
    pub fn with_details<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)?;
        if let Some(correlation_id) = &self.correlation_id {
            write!(f, " [correlation id: {}]", correlation_id)?;
        }
        Ok(())
    }
}
