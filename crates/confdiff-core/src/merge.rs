//! Deep overlay of user-supplied values onto extracted defaults.

use serde_json::Value;

use crate::value::{NestedObject, Object};

/// Merge `overlay` onto `base`.
///
/// Where both sides hold an object the two are merged recursively; any other
/// overlay value, including `null` and lists, replaces the base value.
///
/// # Examples
///
/// ```
/// use confdiff_core::overlay;
/// use serde_json::{json, Value};
///
/// let defaults = json!({"net": {"port": 80, "host": "localhost"}, "tags": ["a"]});
/// let user = json!({"net": {"port": 8080}, "tags": ["b", "c"]});
/// let merged = overlay(defaults.as_object().unwrap(), user.as_object().unwrap());
/// assert_eq!(
///     Value::Object(merged),
///     json!({"net": {"port": 8080, "host": "localhost"}, "tags": ["b", "c"]})
/// );
/// ```
pub fn overlay(base: &Object, overlay: &Object) -> Object {
    let mut merged = base.clone();
    for (key, value) in overlay {
        let next = match (merged.get(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                Value::Object(self::overlay(existing, incoming))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

/// [`overlay`] applied group by group to two maps of maps.
pub fn overlay_nested(base: &NestedObject, overlay: &NestedObject) -> NestedObject {
    let mut merged = base.clone();
    for (group, values) in overlay {
        let next = match merged.get(group) {
            Some(existing) => self::overlay(existing, values),
            None => values.clone(),
        };
        merged.insert(group.clone(), next);
    }
    merged
}
