//! Canonical serialization and debug printing.
//!
//! Objects keep insertion order in memory, so two equal configurations can
//! serialize differently. [`canonicalize`] rebuilds a tree with the keys of
//! every object in ascending byte order, which makes serialization
//! deterministic. [`normalize`] applies that to JSON text.

use serde_json::Value;

use crate::error::{EngineError, Result};
use crate::value::Object;

/// Rendered by [`print_json`] when a value cannot be printed.
pub const INVALID_JSON_SENTINEL: &str = "{ <invalid json> }";

/// Parse a JSON object document and re-serialize it compactly with sorted keys.
///
/// Fails with [`EngineError::Parse`] when the text is not valid JSON or its
/// root is not an object.
///
/// # Examples
///
/// ```
/// use confdiff_core::normalize;
///
/// let out = normalize(r#"{"z": {"b": 1, "a": [2, {"y": 0, "x": 0}]}, "m": "s"}"#).unwrap();
/// assert_eq!(out, r#"{"m":"s","z":{"a":[2,{"x":0,"y":0}],"b":1}}"#);
///
/// assert!(normalize("[1, 2]").is_err());
/// ```
pub fn normalize(json: &str) -> Result<String> {
    let parsed: Object = serde_json::from_str(json)?;
    normalize_value(&parsed)
}

/// Serialize an in-memory object compactly with sorted keys.
pub fn normalize_value(object: &Object) -> Result<String> {
    let canonical = canonicalize_object(object);
    serde_json::to_string(&canonical).map_err(EngineError::Serialization)
}

/// Return a copy of `value` whose objects list their keys in ascending order.
///
/// List order is meaningful and is left untouched.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(canonicalize_object(map)),
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

fn canonicalize_object(map: &Object) -> Object {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    entries
        .into_iter()
        .map(|(key, child)| (key.clone(), canonicalize(child)))
        .collect()
}

/// Render `value` as indented JSON with sorted keys.
pub fn to_pretty_json(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(&canonicalize(value)).map_err(EngineError::Serialization)
}

/// Human-readable rendering for logs and diagnostics. Never fails.
///
/// Falls back to [`INVALID_JSON_SENTINEL`] instead of returning an error, so it
/// must only be used where the output does not affect behavior. Use
/// [`to_pretty_json`] anywhere the rendering matters.
pub fn print_json(value: &Value) -> String {
    match to_pretty_json(value) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "failed to render JSON for display");
            INVALID_JSON_SENTINEL.to_string()
        }
    }
}
