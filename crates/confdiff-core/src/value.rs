//! Value kinds and structural equality over `serde_json::Value` trees.
//!
//! The engine works directly on `serde_json::Value`, which is already a closed
//! tagged union over the JSON kinds. This module adds the two primitives every
//! comparison builds on: the *kind* of a value (used for the type-change rule
//! in [`crate::diff`]) and an explicit structural equality that keeps integers
//! and floats apart.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Number, Value};

/// A JSON object: unique string keys mapped to values.
pub type Object = Map<String, Value>;

/// A two-level "map of maps", e.g. service settings grouped by subsystem.
pub type NestedObject = BTreeMap<String, Object>;

/// The dynamic kind of a value. Integers and floats share [`ValueKind::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    List,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Return the kind of `value`.
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::List,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Structural equality of two value trees.
///
/// - numbers are equal when they have the same JSON text; numbers keep the
///   text they were parsed from, so `1` and `1.0` differ, and so do `0.0`
///   and `-0.0`
/// - strings and bools compare by value
/// - lists compare element-wise in order
/// - objects compare by key set and per-key value, ignoring key order
///
/// # Examples
///
/// ```
/// use confdiff_core::values_equal;
/// use serde_json::json;
///
/// assert!(values_equal(&json!({"a": 1, "b": [true]}), &json!({"b": [true], "a": 1})));
/// assert!(!values_equal(&json!(1), &json!(1.0)));
/// ```
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y),
        _ => false,
    }
}

/// Key-order-insensitive equality of two objects.
pub(crate) fn objects_equal(a: &Object, b: &Object) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, left)| b.get(key).is_some_and(|right| values_equal(left, right)))
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    // Same text is what the hasher and normalizer emit, so equal numbers
    // always serialize, and therefore hash, identically.
    a.as_str() == b.as_str()
}
