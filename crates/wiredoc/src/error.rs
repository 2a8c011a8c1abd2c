//! Error types for the document model.

use thiserror::Error;

/// Errors returned when decoding wire bytes into a document.
///
/// Schema mismatches (wrong JSON kind for a field, out-of-set enum values,
/// malformed nested documents) are not errors: they degrade the document to
/// its unparsed representation instead. Only malformed input and absent
/// required keys abort the decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object at the document root")]
    NotAnObject,
    #[error("required field {0:?} is missing")]
    MissingRequiredField(String),
}

/// Errors returned when serializing a document to wire bytes.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by [`Document`](crate::doc::Document) mutators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document degraded to the unparsed state; typed mutation is
    /// unavailable.
    #[error("document is in the unparsed state")]
    Unparsed,
    /// `set_null` was called on a field not declared nullable.
    #[error("field {0:?} is not nullable")]
    NotNullable(String),
}
