//! Pairwise value comparison used by comparison and membership rules
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use conform_core::convert;
use regex::Regex;
use serde_json::Value;
use std::cmp::Ordering;

/// Comparison operations accepted by [`ObjectComparator::compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOperation {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    Like,
}

impl CompareOperation {
    /// Parse an operation name, case-insensitively and with synonyms
    pub fn parse(operation: &str) -> Option<Self> {
        match operation.trim().to_uppercase().as_str() {
            "=" | "==" | "EQ" => Some(CompareOperation::Equal),
            "<>" | "!=" | "NE" => Some(CompareOperation::NotEqual),
            "<" | "LT" => Some(CompareOperation::Less),
            ">" | "GT" => Some(CompareOperation::Greater),
            "<=" | "LE" => Some(CompareOperation::LessOrEqual),
            ">=" | "GE" => Some(CompareOperation::GreaterOrEqual),
            "LIKE" => Some(CompareOperation::Like),
            _ => None,
        }
    }
}

/// Compares dynamically-typed values by their canonical forms
///
/// Values that both convert to numbers compare numerically, so `5`, `5.0`
/// and `"5"` are all equal. Everything else compares by string form.
pub struct ObjectComparator;

impl ObjectComparator {
    /// Apply a named operation to two values
    ///
    /// Unknown operations never hold.
    pub fn compare(value1: &Value, operation: &str, value2: &Value) -> bool {
        let Some(op) = CompareOperation::parse(operation) else {
            tracing::debug!(operation, "unknown comparison operation");
            return false;
        };

        match op {
            CompareOperation::Equal => Self::are_equal(value1, value2),
            CompareOperation::NotEqual => Self::are_not_equal(value1, value2),
            CompareOperation::Less => Self::is_less(value1, value2),
            CompareOperation::Greater => Self::is_greater(value1, value2),
            CompareOperation::LessOrEqual => Self::is_less_or_equal(value1, value2),
            CompareOperation::GreaterOrEqual => Self::is_greater_or_equal(value1, value2),
            CompareOperation::Like => Self::matches(value1, value2),
        }
    }

    /// Equality: two nulls are equal, a null never equals a non-null
    pub fn are_equal(value1: &Value, value2: &Value) -> bool {
        match (value1.is_null(), value2.is_null()) {
            (true, true) => true,
            (false, false) => Self::are_equal_non_null(value1, value2),
            _ => false,
        }
    }

    pub fn are_not_equal(value1: &Value, value2: &Value) -> bool {
        !Self::are_equal(value1, value2)
    }

    /// Strictly less; false when either side is null
    pub fn is_less(value1: &Value, value2: &Value) -> bool {
        Self::ordering(value1, value2) == Some(Ordering::Less)
    }

    /// Strictly greater; false when either side is null
    pub fn is_greater(value1: &Value, value2: &Value) -> bool {
        Self::ordering(value1, value2) == Some(Ordering::Greater)
    }

    /// Less or equal; false when either side is null
    pub fn is_less_or_equal(value1: &Value, value2: &Value) -> bool {
        if value1.is_null() || value2.is_null() {
            return false;
        }
        Self::is_less(value1, value2) || Self::are_equal_non_null(value1, value2)
    }

    /// Greater or equal; false when either side is null
    pub fn is_greater_or_equal(value1: &Value, value2: &Value) -> bool {
        if value1.is_null() || value2.is_null() {
            return false;
        }
        Self::is_greater(value1, value2) || Self::are_equal_non_null(value1, value2)
    }

    /// Pattern match of `value1` against the pattern in `value2`
    ///
    /// The pattern is an unanchored regular expression. An invalid pattern
    /// falls back to plain substring containment.
    pub fn matches(value1: &Value, value2: &Value) -> bool {
        match (convert::to_nullable_string(value1), convert::to_nullable_string(value2)) {
            (None, None) => true,
            (Some(text), Some(pattern)) => match Regex::new(&pattern) {
                Ok(regex) => regex.is_match(&text),
                Err(_) => text.contains(pattern.as_str()),
            },
            _ => false,
        }
    }

    fn are_equal_non_null(value1: &Value, value2: &Value) -> bool {
        if value1 == value2 {
            return true;
        }
        if let (Some(number1), Some(number2)) =
            (convert::to_nullable_double(value1), convert::to_nullable_double(value2))
        {
            return number1 == number2;
        }
        match (convert::to_nullable_string(value1), convert::to_nullable_string(value2)) {
            (Some(string1), Some(string2)) => string1 == string2,
            _ => false,
        }
    }

    fn ordering(value1: &Value, value2: &Value) -> Option<Ordering> {
        if value1.is_null() || value2.is_null() {
            return None;
        }
        if let (Some(number1), Some(number2)) =
            (convert::to_nullable_double(value1), convert::to_nullable_double(value2))
        {
            return number1.partial_cmp(&number2);
        }
        let string1 = convert::to_nullable_string(value1)?;
        let string2 = convert::to_nullable_string(value2)?;
        Some(string1.cmp(&string2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_synonyms() {
        assert_eq!(CompareOperation::parse("eq"), Some(CompareOperation::Equal));
        assert_eq!(CompareOperation::parse("=="), Some(CompareOperation::Equal));
        assert_eq!(CompareOperation::parse("<>"), Some(CompareOperation::NotEqual));
        assert_eq!(CompareOperation::parse("ge"), Some(CompareOperation::GreaterOrEqual));
        assert_eq!(CompareOperation::parse("like"), Some(CompareOperation::Like));
        assert_eq!(CompareOperation::parse("~="), None);
    }

    #[test]
    fn test_equality() {
        assert!(ObjectComparator::compare(&Value::Null, "==", &Value::Null));
        assert!(!ObjectComparator::compare(&Value::Null, "==", &json!(1)));
        assert!(ObjectComparator::compare(&json!(5), "EQ", &json!("5")));
        assert!(ObjectComparator::compare(&json!(5), "=", &json!(5.0)));
        assert!(ObjectComparator::compare(&json!("abc"), "==", &json!("abc")));
        assert!(!ObjectComparator::compare(&json!("abc"), "==", &json!("ABC")));
        assert!(ObjectComparator::compare(&json!("abc"), "!=", &json!("ABC")));
        assert!(ObjectComparator::compare(&Value::Null, "NE", &json!(0)));
    }

    #[test]
    fn test_ordering() {
        assert!(ObjectComparator::compare(&json!(5), "<", &json!(10)));
        assert!(ObjectComparator::compare(&json!("10"), "GT", &json!(5)));
        assert!(ObjectComparator::compare(&json!(5), "<=", &json!(5)));
        assert!(ObjectComparator::compare(&json!(5), ">=", &json!("5")));
        assert!(!ObjectComparator::compare(&json!(6), "<=", &json!(5)));
        assert!(ObjectComparator::compare(&json!("apple"), "<", &json!("banana")));
    }

    #[test]
    fn test_ordering_with_null_never_holds() {
        for op in ["<", ">", "<=", ">="] {
            assert!(!ObjectComparator::compare(&Value::Null, op, &json!(5)), "{}", op);
            assert!(!ObjectComparator::compare(&json!(5), op, &Value::Null), "{}", op);
            assert!(!ObjectComparator::compare(&Value::Null, op, &Value::Null), "{}", op);
        }
    }

    #[test]
    fn test_like() {
        assert!(ObjectComparator::compare(&Value::Null, "LIKE", &Value::Null));
        assert!(!ObjectComparator::compare(&json!("abc"), "LIKE", &Value::Null));
        assert!(ObjectComparator::compare(&json!("hello world"), "like", &json!("wor")));
        assert!(ObjectComparator::compare(&json!("ABC-123"), "LIKE", &json!("^[A-Z]+-\\d+$")));
        assert!(!ObjectComparator::compare(&json!("abc-123"), "LIKE", &json!("^[A-Z]+-\\d+$")));
        // invalid pattern falls back to containment
        assert!(ObjectComparator::compare(&json!("a(b"), "LIKE", &json!("(")));
    }

    #[test]
    fn test_unknown_operation() {
        assert!(!ObjectComparator::compare(&json!(1), "BETWEEN", &json!(1)));
    }
}
