//! Conform Schemas - runtime validation of dynamically-typed values
//!
//! This crate checks arbitrary JSON value trees against declarative schemas
//! and reports structured findings instead of failing on the first problem.
//!
//! ## Features
//!
//! - **Schemas**: plain, object, property, array and map schemas that nest freely
//! - **Rules**: AND/OR/NOT composition, membership, presence and comparison rules
//! - **Type Matching**: primitive type tags, free-form type names and nested schemas
//! - **Findings**: every problem in the tree, with path, severity and a stable code
//! - **Exceptions**: lenient or strict conversion of findings into one error
//!
//! ## Quick Start
//!
//! ```rust
//! use conform_schemas::{ObjectSchema, SchemaValidator, TypeCode};
//! use conform_schemas::rules::ValueComparisonRule;
//! use serde_json::json;
//!
//! let schema = ObjectSchema::new()
//!     .with_required_property("id", TypeCode::String, vec![])
//!     .with_property(
//!         conform_schemas::PropertySchema::new("age")
//!             .with_type(TypeCode::Integer)
//!             .with_rule(ValueComparisonRule::new(">=", json!(0))),
//!     );
//!
//! let results = schema.validate(&json!({"age": -1}));
//! assert_eq!(results.len(), 2);
//!
//! let error = schema
//!     .validate_and_throw_exception(Some("request-1"), &json!({"age": -1}), false)
//!     .unwrap_err();
//! assert!(error.message().starts_with("Validation failed"));
//! ```
//!
//! ## Failure Policy
//!
//! - **Information** findings never fail
//! - **Warning** findings fail only in strict mode
//! - **Error** findings always fail
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{
    presets, rules, validate_batch, validate_with_config, ArraySchema, CompareOperation,
    MapSchema, ObjectComparator, ObjectSchema, PropertySchema, Schema, SchemaValidator,
    TypeCode, TypeDescriptor, TypeMatcher, ValidationConfig, ValidationException,
    ValidationResult, ValidationResultType, ValidationRule,
};
