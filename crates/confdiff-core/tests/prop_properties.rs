/// Property-based tests for the engine's algebraic guarantees.
///
/// Uses `proptest` to generate random configuration trees and checks:
/// - cleaning is idempotent
/// - normalization is idempotent
/// - every object diffs empty against itself
/// - hashes are stable under key reordering and cosmetic noise
/// - flatten/unflatten round-trips well-shaped two-level maps
/// - structural equality agrees with `serde_json`'s own equality
use confdiff_core::{
    clean, diff, flatten, hash_object, normalize, unflatten, values_equal, Object,
};
use proptest::prelude::*;
use serde_json::{Map, Number, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Generate a short object key.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,7}").unwrap()
}

/// Generate a scalar, biased toward the values cleaning cares about.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::String(String::new())),
        any::<bool>().prop_map(Value::Bool),
        (-1_000i64..1_000i64).prop_map(|n| Value::Number(n.into())),
        (-1_000i32..1_000i32)
            .prop_map(|n| Value::Number(Number::from_f64(f64::from(n) / 8.0).unwrap())),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

/// Generate an arbitrary value tree up to a few levels deep.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Generate an arbitrary object.
fn arb_object() -> impl Strategy<Value = Object> {
    prop::collection::vec((arb_key(), arb_value()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Rebuild an object tree with every object's keys in reverse order.
fn reverse_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut reversed = Map::new();
            for (key, child) in map.iter().rev() {
                reversed.insert(key.clone(), reverse_keys(child));
            }
            Value::Object(reversed)
        }
        Value::Array(items) => Value::Array(items.iter().map(reverse_keys).collect()),
        other => other.clone(),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn clean_is_idempotent(v in arb_value()) {
        let once = clean(&v);
        prop_assert_eq!(clean(&once), once);
    }

    #[test]
    fn normalize_is_idempotent(o in arb_object()) {
        let text = Value::Object(o).to_string();
        let once = normalize(&text).unwrap();
        prop_assert_eq!(normalize(&once).unwrap(), once);
    }

    #[test]
    fn self_diff_is_empty(o in arb_object()) {
        prop_assert!(diff(&o, &o).is_empty());
    }

    #[test]
    fn diff_ignores_key_order(o in arb_object()) {
        let reordered = reverse_keys(&Value::Object(o.clone()));
        prop_assert!(diff(&o, reordered.as_object().unwrap()).is_empty());
    }

    #[test]
    fn diff_against_empty_reference_is_the_input(o in arb_object()) {
        prop_assert_eq!(diff(&Object::new(), &o), o);
    }

    #[test]
    fn hash_is_stable_under_key_reordering(o in arb_object()) {
        let reordered = reverse_keys(&Value::Object(o.clone()));
        prop_assert_eq!(
            hash_object(&o).unwrap(),
            hash_object(reordered.as_object().unwrap()).unwrap()
        );
    }

    #[test]
    fn hash_equals_hash_of_cleaned(o in arb_object()) {
        let cleaned = clean(&Value::Object(o.clone()));
        prop_assert_eq!(
            hash_object(&o).unwrap(),
            hash_object(cleaned.as_object().unwrap()).unwrap()
        );
    }

    #[test]
    fn flatten_unflatten_round_trip(
        groups in prop::collection::vec((arb_key(), arb_object()), 0..5)
    ) {
        let m: Object = groups
            .into_iter()
            .map(|(k, inner)| (k, Value::Object(inner)))
            .collect();
        prop_assert_eq!(flatten(&unflatten(&m).unwrap()), m);
    }

    #[test]
    fn values_equal_agrees_with_serde_json(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(values_equal(&a, &b), a == b);
        prop_assert!(values_equal(&a, &a));
    }
}
