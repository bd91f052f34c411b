//! Deterministic JSON encode/decode helpers.
//!
//! # Scope
//!
//! This crate implements a thin, stateless codec over [JSON (RFC 8259)](https://www.rfc-editor.org/rfc/rfc8259):
//! - **Encoding** - any [`Serialize`] value to compact JSON text with object
//!   keys in ascending lexicographic order
//! - **Decoding** - JSON text into a caller-chosen [`DeserializeOwned`] type,
//!   or into an untyped [`serde_json::Value`] graph
//!
//! # Determinism
//!
//! [RFC 8259 § 4](https://www.rfc-editor.org/rfc/rfc8259#section-4)
//! "An object is an unordered collection of zero or more name/value pairs" -
//! so two encoders may legally disagree on member order. This codec pins the
//! order: values are normalized through [`serde_json::Value`], whose object
//! representation keeps members sorted by key, before text is produced.
//! Arrays stay ordered sequences per
//! [RFC 8259 § 5](https://www.rfc-editor.org/rfc/rfc8259#section-5).
//!
//! # Not Supported
//!
//! - Maps with non-string keys
//! - Value graphs nested beyond the serializer's recursion limit
//!
//! Non-finite floats (NaN, infinities) have no lexical form in JSON and are
//! written as `null`, the standard serialization behavior.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for the codec.
///
/// Both variants are fatal to the current call; nothing is retried or
/// recovered internally.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value cannot be represented as JSON text.
    #[error("serialization failed: {0}")]
    Serialization(serde_json::Error),

    /// The text is not well-formed JSON, or does not fit the target type.
    #[error("parse failed: {0}")]
    Parse(serde_json::Error),
}

/// Encode a value as compact JSON text with lexicographically sorted object keys.
///
/// The value is first normalized into a [`serde_json::Value`]; map members
/// are re-ordered by key during that pass, so the output text is identical
/// for values that differ only in member order.
///
/// # Errors
///
/// Returns [`CodecError::Serialization`] if the value contains something
/// JSON cannot express: a map keyed by non-strings, or nesting beyond the
/// serializer's recursion limit.
pub fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
    let normalized = serde_json::to_value(value).map_err(CodecError::Serialization)?;
    serde_json::to_string(&normalized).map_err(CodecError::Serialization)
}

/// Decode JSON text into a value of the target type.
///
/// The target type supplies the behavior; the parsed members supply the
/// data. Fields are filled by name with serde's usual rules - there is no
/// extra validation layer on top.
///
/// # Errors
///
/// Returns [`CodecError::Parse`] if the text is malformed or its shape does
/// not satisfy the target type.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Parse)
}

/// Decode JSON text into an untyped value graph.
///
/// For callers that want the parsed data without declaring a shape.
///
/// # Errors
///
/// Returns [`CodecError::Parse`] if the text is malformed.
pub fn decode_value(text: &str) -> Result<serde_json::Value, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Parse)
}
