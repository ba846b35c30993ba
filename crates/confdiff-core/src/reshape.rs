//! Conversions between a "map of maps" and a flat map of values.

use serde_json::Value;

use crate::error::{EngineError, Result};
use crate::value::{kind_of, NestedObject, Object};

/// Re-wrap every inner map as an object value. Never fails.
pub fn flatten(nested: &NestedObject) -> Object {
    nested
        .iter()
        .map(|(key, inner)| (key.clone(), Value::Object(inner.clone())))
        .collect()
}

/// Unwrap every value of `flat` into a map of maps.
///
/// Fails with [`EngineError::Shape`] naming the first key, in iteration order,
/// whose value is not an object.
///
/// # Examples
///
/// ```
/// use confdiff_core::{unflatten, EngineError};
/// use serde_json::json;
///
/// let ok = json!({"sys": {"port": 80}});
/// let nested = unflatten(ok.as_object().unwrap()).unwrap();
/// assert_eq!(nested["sys"]["port"], json!(80));
///
/// let bad = json!({"sys": {"port": 80}, "debug": true});
/// match unflatten(bad.as_object().unwrap()) {
///     Err(EngineError::Shape { key }) => assert_eq!(key, "debug"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub fn unflatten(flat: &Object) -> Result<NestedObject> {
    let mut nested = NestedObject::new();
    for (key, value) in flat {
        match value {
            Value::Object(inner) => {
                nested.insert(key.clone(), inner.clone());
            }
            other => {
                tracing::debug!(key = %key, kind = %kind_of(other), "expected an object");
                return Err(EngineError::Shape { key: key.clone() });
            }
        }
    }
    Ok(nested)
}
