//! # confdiff-core
//!
//! Reconciliation engine for semi-structured configuration trees.
//!
//! A declarative provisioning tool keeps two views of every resource: the
//! configuration the user *desires* and the configuration last *observed* on
//! the remote side. This crate answers the three questions needed to reconcile
//! them, all over plain `serde_json::Value` trees:
//!
//! - **What changed?** [`diff`] reports the keys whose value is new or
//!   different in the desired tree, recursing into nested objects.
//! - **Is this the same configuration?** [`hash_object`] fingerprints the
//!   meaningful content of an object, ignoring empty strings, empty
//!   collections, nulls, and key order.
//! - **What are the defaults?** [`extract_defaults`] walks a JSON-Schema-like
//!   document and materializes the nested default values it declares.
//!
//! ## Quick start
//!
//! ```rust
//! use confdiff_core::{diff, hash_object, normalize};
//! use serde_json::json;
//!
//! let observed = json!({"net": {"port": 80, "host": "a"}, "tags": ["x"]});
//! let desired = json!({"net": {"port": 8080, "host": "a"}, "tags": ["x"]});
//!
//! let patch = diff(observed.as_object().unwrap(), desired.as_object().unwrap());
//! assert_eq!(serde_json::Value::Object(patch), json!({"net": {"port": 8080}}));
//!
//! let a = json!({"a": "1", "b": "", "c": {}});
//! let b = json!({"a": "1"});
//! assert_eq!(
//!     hash_object(a.as_object().unwrap()).unwrap(),
//!     hash_object(b.as_object().unwrap()).unwrap(),
//! );
//!
//! assert_eq!(normalize(r#"{"b":1,"a":2}"#).unwrap(), r#"{"a":2,"b":1}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — value kinds and structural equality
//! - [`autotype`] — best-effort typing of string scalars
//! - [`clean`] — pruning of semantically-empty entries
//! - [`normalize`] — canonical key ordering and debug printing
//! - [`hash`] — SHA-256 content fingerprints
//! - [`diff`] — one-directional change detection
//! - [`schema`] — default extraction from schema documents
//! - [`reshape`] — nested/flat map conversions
//! - [`merge`] — deep overlay of user values onto defaults
//! - [`error`] — error taxonomy

pub mod autotype;
pub mod clean;
pub mod diff;
pub mod error;
pub mod hash;
pub mod merge;
pub mod normalize;
pub mod reshape;
pub mod schema;
pub mod value;

pub use autotype::{autotype, autotype_list, autotype_map, autotype_str};
pub use clean::clean;
pub use diff::diff;
pub use error::{EngineError, Result};
pub use hash::hash_object;
pub use merge::{overlay, overlay_nested};
pub use normalize::{canonicalize, normalize, normalize_value, print_json, to_pretty_json};
pub use reshape::{flatten, unflatten};
pub use schema::extract_defaults;
pub use value::{kind_of, values_equal, NestedObject, Object, ValueKind};
