//! Canonical conversions of JSON values
//!
//! Comparisons and type checks need a single string or numeric form for a
//! value regardless of how it was written: `5`, `5.0` and `"5"` all have
//! the numeric form `5.0`. These helpers never fail; a value without the
//! requested form converts to `None`.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Convert a value into its canonical string form
///
/// Arrays are rendered as their elements' string forms joined with `,`,
/// objects as compact JSON.
pub fn to_nullable_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            // f64's Display drops a zero fraction ("5" rather than "5.0")
            (None, None, Some(f)) => f.to_string(),
            _ => n.to_string(),
        }),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| to_nullable_string(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Convert a value into its string form, or `default` when it has none
pub fn to_string_or(value: &Value, default: &str) -> String {
    to_nullable_string(value).unwrap_or_else(|| default.to_string())
}

/// Convert a value into a double
///
/// Numbers convert directly and strings are parsed after trimming.
pub fn to_nullable_double(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Convert a value into a 64-bit integer, truncating fractional numbers
pub fn to_nullable_long(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

/// Convert a value into a UTC timestamp
///
/// Accepts RFC 3339 strings, `YYYY-MM-DD` dates (midnight UTC) and integer
/// numbers interpreted as Unix milliseconds.
pub fn to_nullable_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
                return Some(parsed.with_timezone(&Utc));
            }
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_forms() {
        assert_eq!(to_nullable_string(&Value::Null), None);
        assert_eq!(to_nullable_string(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(to_nullable_string(&json!(5)).as_deref(), Some("5"));
        assert_eq!(to_nullable_string(&json!(5.0)).as_deref(), Some("5"));
        assert_eq!(to_nullable_string(&json!(2.5)).as_deref(), Some("2.5"));
        assert_eq!(to_nullable_string(&json!(true)).as_deref(), Some("true"));
        assert_eq!(to_nullable_string(&json!([1, "a", null])).as_deref(), Some("1,a,"));
        assert_eq!(to_nullable_string(&json!({"a": 1})).as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(to_string_or(&Value::Null, "value"), "value");
    }

    #[test]
    fn test_double_forms() {
        assert_eq!(to_nullable_double(&json!(5)), Some(5.0));
        assert_eq!(to_nullable_double(&json!(" 5.5 ")), Some(5.5));
        assert_eq!(to_nullable_double(&json!("five")), None);
        assert_eq!(to_nullable_double(&json!("NaN")), None);
        assert_eq!(to_nullable_double(&json!(true)), None);
        assert_eq!(to_nullable_double(&json!([1])), None);
    }

    #[test]
    fn test_long_forms() {
        assert_eq!(to_nullable_long(&json!(7)), Some(7));
        assert_eq!(to_nullable_long(&json!(7.9)), Some(7));
        assert_eq!(to_nullable_long(&json!("42")), Some(42));
        assert_eq!(to_nullable_long(&json!("4.2")), Some(4));
        assert_eq!(to_nullable_long(&Value::Null), None);
    }

    #[test]
    fn test_datetime_forms() {
        let parsed = to_nullable_datetime(&json!("2024-03-01T10:00:00Z")).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T10:00:00+00:00");

        let date = to_nullable_datetime(&json!("2024-03-01")).unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-01T00:00:00+00:00");

        let millis = to_nullable_datetime(&json!(0)).unwrap();
        assert_eq!(millis.timestamp(), 0);

        assert!(to_nullable_datetime(&json!("yesterday")).is_none());
        assert!(to_nullable_datetime(&json!(1.5)).is_none());
    }
}
