//! Default-value extraction from JSON-Schema-like documents.
//!
//! A schema node is an object with three reserved keys:
//!
//! - `type` — `"object"`, `"string"`, `"integer"`, ...; when absent it is
//!   inferred as `"object"` if the node has `properties`, else `"string"`
//! - `properties` — child nodes of an object node
//! - `default` — the default value of a non-object node
//!
//! Object nodes produce an object of their children's defaults (possibly
//! empty); other nodes produce their `default` if they declare one. A
//! declared `"default": null` is kept and is distinct from having no default.

use serde_json::Value;

use crate::error::{EngineError, Result};
use crate::reshape::unflatten;
use crate::value::{NestedObject, Object};

const OBJECT_TYPE: &str = "object";
const STRING_TYPE: &str = "string";
const ROOT_PATH: &str = "<root>";

/// Extract the two-level default configuration implied by `schema`.
///
/// The root must be an object node, and every property under the root must
/// itself extract to an object (settings grouped by subsystem). Fails with
/// [`EngineError::SchemaType`] for a non-object root and with
/// [`EngineError::Shape`] naming the first root property whose default is not
/// an object.
///
/// # Examples
///
/// ```
/// use confdiff_core::extract_defaults;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {
///         "sys": {
///             "type": "object",
///             "properties": {"port": {"type": "string", "default": "80"}}
///         }
///     }
/// });
/// let defaults = extract_defaults(schema.as_object().unwrap()).unwrap();
/// assert_eq!(defaults["sys"]["port"], json!("80"));
/// ```
pub fn extract_defaults(schema: &Object) -> Result<NestedObject> {
    let flat = object_defaults(schema)?;
    unflatten(&flat)
}

/// Extract the defaults of an object node without the two-level shape check.
pub fn object_defaults(schema: &Object) -> Result<Object> {
    defaults_of_object(schema, ROOT_PATH)
}

fn defaults_of_object(node: &Object, path: &str) -> Result<Object> {
    let node_type = node_type(node, path)?;
    if node_type != OBJECT_TYPE {
        return Err(EngineError::SchemaType {
            path: path.to_string(),
            message: format!("expected an object node, found type '{node_type}'"),
        });
    }

    let mut result = Object::new();
    let properties = match node.get("properties") {
        None => return Ok(result),
        Some(Value::Object(properties)) => properties,
        Some(_) => {
            return Err(EngineError::SchemaType {
                path: path.to_string(),
                message: "'properties' must be an object".to_string(),
            })
        }
    };

    for (key, child) in properties {
        let child_path = child_path(path, key);
        let Value::Object(child) = child else {
            tracing::debug!(path = %child_path, "skipping non-object schema property");
            continue;
        };
        if let Some(default) = default_for(child, &child_path)? {
            result.insert(key.clone(), default);
        }
    }
    Ok(result)
}

/// Default of any node: `None` when a non-object node declares no default.
fn default_for(node: &Object, path: &str) -> Result<Option<Value>> {
    if node_type(node, path)? == OBJECT_TYPE {
        return defaults_of_object(node, path).map(|obj| Some(Value::Object(obj)));
    }
    Ok(node.get("default").cloned())
}

fn node_type<'a>(node: &'a Object, path: &str) -> Result<&'a str> {
    match node.get("type") {
        Some(Value::String(declared)) => Ok(declared.as_str()),
        Some(_) => Err(EngineError::SchemaType {
            path: path.to_string(),
            message: "'type' must be a string".to_string(),
        }),
        None if node.contains_key("properties") => Ok(OBJECT_TYPE),
        None => Ok(STRING_TYPE),
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent == ROOT_PATH {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
