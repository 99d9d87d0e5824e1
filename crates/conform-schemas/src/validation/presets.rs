//! Ready-made schemas for common request parameters
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::validation::array_schema::ArraySchema;
use crate::validation::map_schema::MapSchema;
use crate::validation::object_schema::ObjectSchema;
use crate::validation::types::TypeCode;

/// Paging parameters: optional `skip`, `take` and `total`
pub fn paging_params_schema() -> ObjectSchema {
    ObjectSchema::new()
        .allow_undefined(true)
        .with_optional_property("skip", TypeCode::Long, vec![])
        .with_optional_property("take", TypeCode::Long, vec![])
        .with_optional_property("total", TypeCode::Boolean, vec![])
}

/// Token-based paging parameters: optional `token`, `take` and `total`
pub fn tokenized_paging_params_schema() -> ObjectSchema {
    ObjectSchema::new()
        .allow_undefined(true)
        .with_optional_property("token", TypeCode::String, vec![])
        .with_optional_property("take", TypeCode::Long, vec![])
        .with_optional_property("total", TypeCode::Boolean, vec![])
}

/// Filter parameters: a map from string keys to untyped values
pub fn filter_params_schema() -> MapSchema {
    MapSchema::new().with_key_type(TypeCode::String)
}

/// Projection parameters: a list of field names
pub fn projection_params_schema() -> ArraySchema {
    ArraySchema::of(TypeCode::String)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::base::SchemaValidator;
    use serde_json::json;

    #[test]
    fn test_paging_params() {
        let schema = paging_params_schema();
        assert!(schema.validate(&json!({"skip": 0, "take": 100, "total": true})).is_empty());
        assert!(schema.validate(&json!({"other": "ignored"})).is_empty());

        let results = schema.validate(&json!({"skip": "ten"}));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path(), "skip");
    }

    #[test]
    fn test_tokenized_paging_params() {
        let schema = tokenized_paging_params_schema();
        assert!(schema.validate(&json!({"token": "abc", "take": 10})).is_empty());
        assert_eq!(schema.validate(&json!({"token": 5})).len(), 1);
    }

    #[test]
    fn test_filter_params() {
        let schema = filter_params_schema();
        assert!(schema.validate(&json!({"name": "x", "count": 2, "tags": ["a"]})).is_empty());
        assert_eq!(schema.validate(&json!("name=x")).len(), 1);
    }

    #[test]
    fn test_projection_params() {
        let schema = projection_params_schema();
        assert!(schema.validate(&json!(["id", "name"])).is_empty());
        assert_eq!(schema.validate(&json!(["id", 2])).len(), 1);
    }
}
