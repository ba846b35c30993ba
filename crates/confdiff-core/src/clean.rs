//! Pruning of semantically-empty entries from object trees.

use serde_json::Value;

use crate::value::Object;

/// Remove empty strings, empty lists, empty objects, and nulls from every
/// object in the tree.
///
/// Objects that only become empty after their own children are cleaned are
/// dropped too. List elements are cleaned individually but never removed, and
/// a non-object root is returned unchanged: cleaning prunes object entries, it
/// does not filter the top-level value.
///
/// # Examples
///
/// ```
/// use confdiff_core::clean;
/// use serde_json::json;
///
/// let noisy = json!({"a": "1", "b": "", "c": {"d": null}, "e": [{"f": []}]});
/// assert_eq!(clean(&noisy), json!({"a": "1", "e": [{}]}));
/// ```
pub fn clean(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(clean_object(map)),
        other => other.clone(),
    }
}

fn clean_object(map: &Object) -> Object {
    let mut result = Object::new();
    for (key, child) in map {
        let kept = match child {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::Array(items) if items.is_empty() => None,
            Value::Array(items) => Some(Value::Array(items.iter().map(clean).collect())),
            Value::Object(inner) => {
                let cleaned = clean_object(inner);
                (!cleaned.is_empty()).then_some(Value::Object(cleaned))
            }
            other => Some(other.clone()),
        };
        if let Some(kept) = kept {
            result.insert(key.clone(), kept);
        }
    }
    result
}
