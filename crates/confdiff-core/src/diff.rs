//! One-directional change detection between two configuration objects.
//!
//! [`diff`] answers "what is new or different in `input` compared to
//! `reference`?" and returns the minimal update payload for it. Keys that only
//! exist in `reference` are never reported: this is not a symmetric diff.
//!
//! Per key, values are compared with the following rule:
//!
//! 1. **Kind change** (string vs number, object vs list, ...): the input value
//!    replaces the reference value verbatim.
//! 2. **Objects**: recurse. Reported only if the nested diff is non-empty, and
//!    the nested diff is what gets reported.
//! 3. **Lists**: atomic. Any difference in length or in any element reports the
//!    whole input list. There is no per-index patching.
//! 4. **Scalars**: reported when not equal under
//!    [`values_equal`](crate::values_equal).

use serde_json::Value;

use crate::value::{kind_of, values_equal, Object};

/// Compute the keys of `input` that are absent from or differ in `reference`.
///
/// An empty result means there is no meaningful difference.
///
/// # Examples
///
/// ```
/// use confdiff_core::diff;
/// use serde_json::{json, Value};
///
/// let reference = json!({"a": {"x": 1, "y": 2}, "l": [1, 2, 3], "gone": true});
/// let input = json!({"a": {"x": 1, "y": 3}, "l": [1, 2, 4], "new": "v"});
///
/// let patch = diff(reference.as_object().unwrap(), input.as_object().unwrap());
/// assert_eq!(
///     Value::Object(patch),
///     json!({"a": {"y": 3}, "l": [1, 2, 4], "new": "v"})
/// );
/// ```
pub fn diff(reference: &Object, input: &Object) -> Object {
    let mut result = Object::new();
    for (key, value) in input {
        match reference.get(key) {
            Some(previous) => {
                if let Some(changed) = compare(previous, value) {
                    tracing::trace!(key = %key, "value changed");
                    result.insert(key.clone(), changed);
                }
            }
            None => {
                tracing::trace!(key = %key, "key added");
                result.insert(key.clone(), value.clone());
            }
        }
    }
    result
}

/// Apply the tie-break rule to one pair of values.
///
/// Returns the replacement to report, or `None` when nothing changed.
fn compare(reference: &Value, input: &Value) -> Option<Value> {
    if kind_of(reference) != kind_of(input) {
        return Some(input.clone());
    }
    match (reference, input) {
        (Value::Object(previous), Value::Object(current)) => {
            let nested = diff(previous, current);
            (!nested.is_empty()).then_some(Value::Object(nested))
        }
        // Lists and scalars are both replaced wholesale when unequal.
        _ => (!values_equal(reference, input)).then(|| input.clone()),
    }
}
