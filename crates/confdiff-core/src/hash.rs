//! Content fingerprints of configuration objects.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::clean::clean;
use crate::error::{EngineError, Result};
use crate::normalize::canonicalize;
use crate::value::Object;

/// SHA-256 of the cleaned, canonically serialized object, as 64 lowercase
/// hex characters.
///
/// Two objects hash equal whenever they are structurally equal after
/// [`clean`](crate::clean()): key order, empty strings, empty collections,
/// and nulls do not affect the result.
///
/// # Examples
///
/// ```
/// use confdiff_core::hash_object;
/// use serde_json::json;
///
/// let noisy = json!({"b": "", "a": "1", "c": {}});
/// let plain = json!({"a": "1"});
/// let h = hash_object(noisy.as_object().unwrap()).unwrap();
/// assert_eq!(h, hash_object(plain.as_object().unwrap()).unwrap());
/// assert_eq!(h.len(), 64);
/// ```
pub fn hash_object(object: &Object) -> Result<String> {
    let cleaned = clean(&Value::Object(object.clone()));
    let bytes = serde_json::to_vec(&canonicalize(&cleaned)).map_err(EngineError::Serialization)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
