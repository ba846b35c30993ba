/// Tests for cleaning and content hashing.
///
/// Hashes must agree whenever the cleaned trees are structurally equal, so
/// most hash tests are phrased as "these two noisy inputs hash the same".
use confdiff_core::{clean, hash_object, values_equal};
use serde_json::{json, Value};

fn hash(value: Value) -> String {
    hash_object(value.as_object().expect("hash input must be an object"))
        .expect("hashing a well-formed object must succeed")
}

// ============================================================================
// Cleaning
// ============================================================================

#[test]
fn clean_drops_empty_entries() {
    let noisy = json!({"a": "1", "b": "", "c": {}, "d": [], "e": null, "f": 0, "g": false});
    assert_eq!(clean(&noisy), json!({"a": "1", "f": 0, "g": false}));
}

#[test]
fn clean_drops_objects_that_become_empty() {
    let noisy = json!({"a": {"b": {"c": "", "d": null}}, "keep": 1});
    assert_eq!(clean(&noisy), json!({"keep": 1}));
}

#[test]
fn clean_keeps_list_elements_but_cleans_them() {
    let noisy = json!({"l": ["", null, {"x": "", "y": 1}, {}]});
    assert_eq!(clean(&noisy), json!({"l": ["", null, {"y": 1}, {}]}));
}

#[test]
fn clean_leaves_non_object_roots_alone() {
    assert_eq!(clean(&json!("")), json!(""));
    assert_eq!(clean(&json!(null)), json!(null));
    assert_eq!(clean(&json!([{"a": ""}, []])), json!([{"a": ""}, []]));
}

#[test]
fn clean_is_idempotent_on_nested_noise() {
    let noisy = json!({
        "a": [{"b": {"c": ""}}, [null, {"d": []}]],
        "e": {"f": {"g": {}}},
        "h": " "
    });
    let once = clean(&noisy);
    assert_eq!(clean(&once), once);
}

#[test]
fn clean_does_not_mutate_input() {
    let noisy = json!({"a": ""});
    let _ = clean(&noisy);
    assert_eq!(noisy, json!({"a": ""}));
}

// ============================================================================
// Hashing
// ============================================================================

#[test]
fn hash_ignores_cosmetic_noise() {
    assert_eq!(hash(json!({"a": "1", "b": "", "c": {}})), hash(json!({"a": "1"})));
}

#[test]
fn hash_ignores_key_order() {
    assert_eq!(
        hash(json!({"a": 1, "b": {"c": 2, "d": 3}})),
        hash(json!({"b": {"d": 3, "c": 2}, "a": 1}))
    );
}

#[test]
fn hash_is_sha256_of_canonical_cleaned_json() {
    // sha256 of the bytes {"a":"1"}
    assert_eq!(
        hash(json!({"b": null, "a": "1"})),
        "9afeb0f2b203f254312ec8ded441d0318b7c34c57f8695ede42d2215a30c0960"
    );
}

#[test]
fn hash_distinguishes_meaningful_changes() {
    assert_ne!(hash(json!({"a": 1})), hash(json!({"a": 2})));
    assert_ne!(hash(json!({"a": 1})), hash(json!({"a": "1"})));
    assert_ne!(hash(json!({"l": [1, 2]})), hash(json!({"l": [2, 1]})));
}

#[test]
fn hash_is_64_lowercase_hex_chars() {
    let h = hash(json!({"svc": {"port": 80}}));
    assert_eq!(h.len(), 64);
    assert!(h.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

// ============================================================================
// Equality and hashing agree
// ============================================================================

#[test]
fn negative_zero_is_neither_equal_nor_same_hash() {
    let neg = json!({"x": -0.0});
    let pos = json!({"x": 0.0});
    assert!(!values_equal(&clean(&neg), &clean(&pos)));
    assert_ne!(hash(neg), hash(pos));
}

#[test]
fn equal_numbers_hash_equal_and_unequal_numbers_do_not() {
    let texts = [
        "0", "-0", "0.0", "-0.0", "1", "1.0", "1.00", "1e0", "100", "1e2",
        "0.1", "0.10000000000000000555", "18446744073709551615", "12345678901234567890123",
    ];
    for a in texts {
        for b in texts {
            let left: Value = serde_json::from_str(&format!(r#"{{"n":{a}}}"#)).unwrap();
            let right: Value = serde_json::from_str(&format!(r#"{{"n":{b}}}"#)).unwrap();
            assert_eq!(
                values_equal(&clean(&left), &clean(&right)),
                hash(left) == hash(right),
                "{a} vs {b}"
            );
        }
    }
}
