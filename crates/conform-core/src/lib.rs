//! Conform Core - value helpers shared by the Conform validators
//!
//! This crate provides the collaborators the validation engine relies on
//! without owning any validation logic itself.
//!
//! # Main Components
//!
//! - **Conversion**: canonical string, numeric and timestamp forms of JSON values
//! - **Property Access**: enumerating and reading the own properties of a value
//! - **Error Handling**: the crate error enum and the structured [`ApplicationError`] record
//!
//! # Example
//!
//! ```rust
//! use conform_core::{convert, reader};
//! use serde_json::json;
//!
//! let value = json!({"count": "5"});
//! let count = reader::get_property(&value, "count");
//! assert_eq!(convert::to_nullable_double(count), Some(5.0));
//! ```

pub mod convert;
pub mod error;
pub mod reader;

// Re-export main types for convenience
pub use error::{ApplicationError, Error, ErrorCategory, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
