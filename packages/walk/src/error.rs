//! Error types for the walk layer.
//!
//! Everything here is a schema or tag-syntax error. Processor failures are
//! the caller's own error type; the walker only requires it to absorb a
//! [`WalkError`] via `From`.

use thiserror::Error;

/// Errors produced while parsing a field's tag string against a schema.
///
/// All of these are surfaced before the processor runs for the offending
/// field, so a malformed tag never causes a side effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The tag names a key the schema does not declare.
    #[error("unknown tag key '{key}'")]
    UnknownKey { key: String },

    /// The same key appears twice in one tag string.
    #[error("duplicate tag key '{key}'")]
    DuplicateKey { key: String },

    /// A key the schema marks required is absent from the tag.
    #[error("required tag key '{key}' is missing")]
    MissingKey { key: &'static str },

    /// A flag key was given a value.
    #[error("tag key '{key}' is a flag and does not take a value")]
    UnexpectedValue { key: String },

    /// A key's validator rejected its value.
    #[error("tag '{key}': {message}")]
    Validation { key: &'static str, message: String },
}
