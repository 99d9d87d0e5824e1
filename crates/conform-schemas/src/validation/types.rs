//! Type codes, type descriptors and runtime type matching
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::SchemaValidator;
use conform_core::convert;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Coarse runtime type of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCode {
    /// No declared type; matches any non-null value
    Unknown,
    Null,
    String,
    Boolean,
    /// Integral number within `i32`
    Integer,
    /// Integral number outside `i32`
    Long,
    Float,
    Double,
    DateTime,
    /// Time span in milliseconds
    Duration,
    /// Any non-null value
    Object,
    Array,
    Map,
}

impl TypeCode {
    /// Resolve a free-form type name, case-insensitively
    ///
    /// Any name ending in `[]` denotes an array.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if name.ends_with("[]") {
            return Some(TypeCode::Array);
        }
        match name.as_str() {
            "object" | "any" => Some(TypeCode::Object),
            "int" | "integer" | "i32" => Some(TypeCode::Integer),
            "long" | "i64" => Some(TypeCode::Long),
            "float" | "f32" => Some(TypeCode::Float),
            "double" | "f64" | "number" => Some(TypeCode::Double),
            "string" | "str" => Some(TypeCode::String),
            "bool" | "boolean" => Some(TypeCode::Boolean),
            "date" | "datetime" => Some(TypeCode::DateTime),
            "duration" | "timespan" => Some(TypeCode::Duration),
            "map" | "dict" | "dictionary" => Some(TypeCode::Map),
            "array" | "list" => Some(TypeCode::Array),
            "null" => Some(TypeCode::Null),
            _ => None,
        }
    }

    fn is_integral(&self) -> bool {
        matches!(self, TypeCode::Integer | TypeCode::Long)
    }

    fn is_fractional(&self) -> bool {
        matches!(self, TypeCode::Float | TypeCode::Double)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeCode::Unknown => "Unknown",
            TypeCode::Null => "Null",
            TypeCode::String => "String",
            TypeCode::Boolean => "Boolean",
            TypeCode::Integer => "Integer",
            TypeCode::Long => "Long",
            TypeCode::Float => "Float",
            TypeCode::Double => "Double",
            TypeCode::DateTime => "DateTime",
            TypeCode::Duration => "Duration",
            TypeCode::Object => "Object",
            TypeCode::Array => "Array",
            TypeCode::Map => "Map",
        };
        write!(f, "{}", name)
    }
}

/// Declared type of a value slot
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    /// A primitive type tag
    Primitive(TypeCode),
    /// A free-form type name such as `"int"` or `"string[]"`
    NamedAlias(String),
    /// A full nested schema the value must satisfy
    Nested(Arc<dyn SchemaValidator>),
}

impl TypeDescriptor {
    /// Wrap a schema as a nested type
    pub fn nested<S: SchemaValidator + 'static>(schema: S) -> Self {
        TypeDescriptor::Nested(Arc::new(schema))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(code) => write!(f, "{}", code),
            TypeDescriptor::NamedAlias(name) => write!(f, "{}", name),
            TypeDescriptor::Nested(_) => write!(f, "Schema"),
        }
    }
}

impl From<TypeCode> for TypeDescriptor {
    fn from(code: TypeCode) -> Self {
        TypeDescriptor::Primitive(code)
    }
}

impl From<&str> for TypeDescriptor {
    fn from(name: &str) -> Self {
        TypeDescriptor::NamedAlias(name.to_string())
    }
}

impl From<String> for TypeDescriptor {
    fn from(name: String) -> Self {
        TypeDescriptor::NamedAlias(name)
    }
}

impl From<Arc<dyn SchemaValidator>> for TypeDescriptor {
    fn from(schema: Arc<dyn SchemaValidator>) -> Self {
        TypeDescriptor::Nested(schema)
    }
}

/// Decides whether runtime values are compatible with declared types
pub struct TypeMatcher;

impl TypeMatcher {
    /// Infer the coarse type of a value
    ///
    /// Numbers keep their written form: `2.0` is a `Double` even though it
    /// has no fractional part.
    pub fn type_of(value: &Value) -> TypeCode {
        match value {
            Value::Null => TypeCode::Null,
            Value::Bool(_) => TypeCode::Boolean,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i32::try_from(i).is_ok() {
                        TypeCode::Integer
                    } else {
                        TypeCode::Long
                    }
                } else if n.is_u64() {
                    TypeCode::Long
                } else {
                    TypeCode::Double
                }
            }
            Value::String(_) => TypeCode::String,
            Value::Array(_) => TypeCode::Array,
            Value::Object(_) => TypeCode::Map,
        }
    }

    /// Check a value against a primitive type tag
    pub fn match_value_type(expected: TypeCode, value: &Value) -> bool {
        Self::match_type(expected, Self::type_of(value), value)
    }

    /// Check an inferred type (and the value it came from) against a tag
    pub fn match_type(expected: TypeCode, actual: TypeCode, value: &Value) -> bool {
        if actual == TypeCode::Null {
            return matches!(expected, TypeCode::Null | TypeCode::Unknown);
        }
        if expected == actual {
            return true;
        }

        match expected {
            TypeCode::Unknown | TypeCode::Object => true,
            TypeCode::Integer | TypeCode::Long => actual.is_integral(),
            TypeCode::Float | TypeCode::Double => actual.is_fractional(),
            TypeCode::DateTime => {
                actual == TypeCode::String && convert::to_nullable_datetime(value).is_some()
            }
            TypeCode::Duration => actual.is_integral(),
            _ => false,
        }
    }

    /// Check a value against a free-form type name
    ///
    /// Unknown names never match.
    pub fn match_type_by_name(name: &str, value: &Value) -> bool {
        match TypeCode::from_name(name) {
            Some(expected) => Self::match_value_type(expected, value),
            None => {
                tracing::debug!(type_name = name, "unknown type name");
                false
            }
        }
    }

    /// Check a value against a non-nested descriptor
    ///
    /// Nested schemas are validated structurally by the schema itself, so
    /// here they only require a non-null value.
    pub fn match_descriptor(descriptor: &TypeDescriptor, value: &Value) -> bool {
        match descriptor {
            TypeDescriptor::Primitive(code) => Self::match_value_type(*code, value),
            TypeDescriptor::NamedAlias(name) => Self::match_type_by_name(name, value),
            TypeDescriptor::Nested(_) => !value.is_null(),
        }
    }
}
