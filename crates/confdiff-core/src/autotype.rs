//! Best-effort typing of loosely-typed string scalars.
//!
//! Sources such as environment variables or form fields only produce strings.
//! Before such values are merged into a typed configuration, each string is
//! coerced to its most likely native type, trying in order:
//!
//! 1. base-10 integer (`"42"`, `"-7"`, `"+3"`)
//! 2. floating-point number (`"3.5"`, `"1e3"`)
//! 3. `"true"` / `"false"`
//! 4. `"null"`
//!
//! Anything else stays a string. Non-string values pass through unchanged.

use serde_json::{Number, Value};

use crate::value::Object;

/// Autotype a single value. Only strings are affected.
///
/// # Examples
///
/// ```
/// use confdiff_core::autotype;
/// use serde_json::json;
///
/// assert_eq!(autotype(&json!("42")), json!(42));
/// assert_eq!(autotype(&json!("3.5")), json!(3.5));
/// assert_eq!(autotype(&json!("true")), json!(true));
/// assert_eq!(autotype(&json!("null")), json!(null));
/// assert_eq!(autotype(&json!("hello")), json!("hello"));
/// assert_eq!(autotype(&json!([1])), json!([1]));
/// ```
pub fn autotype(value: &Value) -> Value {
    match value {
        Value::String(s) => autotype_str(s),
        other => other.clone(),
    }
}

/// Autotype a raw string.
///
/// Numbers keep the digits they were written with, so integers beyond 64 bits
/// and long decimals are not rounded. Floats that are not finite (`"inf"`,
/// `"NaN"`) have no JSON representation and are returned as strings.
pub fn autotype_str(s: &str) -> Value {
    if let Some(n) = parse_integer(s) {
        return Value::Number(n);
    }
    if let Some(n) = parse_float(s) {
        return Value::Number(n);
    }
    match s {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::String(s.to_string()),
    }
}

/// Base-10 integer with an optional sign, of any magnitude.
fn parse_integer(s: &str) -> Option<Number> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n.into());
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Anything short enough to lose its leading zeros already fit in an i64.
    let digits = digits.trim_start_matches('0');
    let text = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    text.parse().ok()
}

/// Finite floating-point number. JSON-shaped input keeps its exact text;
/// other spellings Rust accepts (`"1."`, `".5"`, `"+2.5"`) are re-rendered.
fn parse_float(s: &str) -> Option<Number> {
    let f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
    s.parse::<Number>().ok().or_else(|| Number::from_f64(f))
}

/// Autotype every element of a list, preserving order.
pub fn autotype_list(values: &[Value]) -> Vec<Value> {
    values.iter().map(autotype).collect()
}

/// Autotype every value of an object, preserving the key set.
pub fn autotype_map(map: &Object) -> Object {
    map.iter()
        .map(|(key, value)| (key.clone(), autotype(value)))
        .collect()
}
