//! Error types for the reconciliation engine.

use thiserror::Error;

/// Errors surfaced by the fallible engine operations.
///
/// The differ, cleaner, and autotyper are total and never produce one of these.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The input text was not valid JSON, or its root was not an object.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value tree could not be serialized. Well-formed trees never hit this.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A schema node had an unusable type where an object node was required.
    /// `path` is the dotted location of the node, `<root>` for the document root.
    #[error("schema type error at {path}: {message}")]
    SchemaType { path: String, message: String },

    /// A value expected to be an object was something else.
    #[error("shape error: value under key '{key}' is not an object")]
    Shape { key: String },
}

/// Convenience alias used throughout confdiff-core.
pub type Result<T> = std::result::Result<T, EngineError>;
