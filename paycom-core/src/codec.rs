//! JSON encoding and decoding for gateway messages
//!
//! Thin wrappers around `serde_json` that map failures to
//! [`Error::Serialization`] so callers deal with a single error type.
//!
//! # Examples
//!
//! ```rust
//! use paycom_core::{codec, RequestEnvelope};
//! use serde_json::json;
//!
//! let envelope = RequestEnvelope::with_id("PerformTransaction", json!({"id": "abc"}), 7);
//! let bytes = codec::encode_envelope(&envelope).unwrap();
//!
//! let decoded: RequestEnvelope = codec::decode_as(&bytes).unwrap();
//! assert_eq!(decoded, envelope);
//! ```

use crate::error::{Error, Result};
use crate::types::{ApiResponse, RequestEnvelope};
use serde::{Deserialize, Serialize};

/// Encode any serializable value to a JSON string
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode a request envelope to the bytes sent as the HTTP body
pub fn encode_envelope(envelope: &RequestEnvelope) -> Result<Vec<u8>> {
    serde_json::to_vec(envelope).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode an arbitrary JSON value to body bytes
pub fn encode_value(value: &serde_json::Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode bytes into a specific type
pub fn decode_as<'de, T: Deserialize<'de>>(data: &'de [u8]) -> Result<T> {
    serde_json::from_slice(data).map_err(|e| Error::Serialization(e.to_string()))
}

/// Render a normalized response as a JSON string, e.g. for logging
pub fn encode_response(response: &ApiResponse) -> Result<String> {
    encode(response)
}
