//! Property-based tests for value conversion and property access

use conform_core::{convert, reader};
use proptest::prelude::*;
use serde_json::{json, Value};

proptest! {
    #[test]
    fn integers_round_trip_through_strings(n in any::<i64>()) {
        let as_string = convert::to_nullable_string(&json!(n)).unwrap();
        prop_assert_eq!(convert::to_nullable_long(&Value::String(as_string)), Some(n));
    }

    #[test]
    fn numeric_strings_and_numbers_share_double_form(n in -1_000_000i32..1_000_000) {
        let from_number = convert::to_nullable_double(&json!(n));
        let from_string = convert::to_nullable_double(&json!(n.to_string()));
        prop_assert_eq!(from_number, from_string);
    }

    #[test]
    fn every_enumerated_property_reads_back(keys in proptest::collection::btree_set("[a-z]{1,8}", 0..6)) {
        let mut map = serde_json::Map::new();
        for (i, key) in keys.iter().enumerate() {
            map.insert(key.clone(), json!(i));
        }
        let value = Value::Object(map);

        let entries = reader::get_properties(&value);
        prop_assert_eq!(entries.len(), keys.len());
        for (name, item) in entries {
            prop_assert_eq!(reader::get_property(&value, &name), item);
        }
    }
}
