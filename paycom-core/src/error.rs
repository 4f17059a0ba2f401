//! Error types for the Payme SDK
//!
//! Two kinds of errors live here:
//!
//! - **Error**: SDK-level errors for illegal local usage (uses thiserror)
//! - **RpcErrorData**: the gateway's JSON-RPC error object as it appears on the wire
//!
//! # Failures Are Data
//!
//! Transport failures and gateway-side rejections are *not* reported through
//! `Error`. They are recorded on the [`ApiResponse`](crate::ApiResponse)
//! returned by every call, so a request method never fails because the
//! network or the gateway did. `Error` is reserved for problems the caller
//! can fix locally: a malformed base URL, a credential that cannot be put in
//! a header, or an HTTP client that cannot be constructed.
//!
//! # Gateway Error Messages
//!
//! Payme error objects usually carry a localized message object instead of a
//! plain string:
//!
//! ```json
//! {"code": -31003, "message": {"ru": "...", "uz": "...", "en": "Transaction not found"}}
//! ```
//!
//! `RpcErrorData::message_for` picks the requested language out of either
//! shape and falls back to the static [`catalog`](crate::catalog).
//!
//! # Examples
//!
//! ```rust
//! use paycom_core::RpcErrorData;
//! use serde_json::json;
//!
//! let error: RpcErrorData = serde_json::from_value(json!({
//!     "code": -31003,
//!     "message": {"ru": "Транзакция не найдена", "uz": "To'lov topilmadi", "en": "Transaction not found"}
//! })).unwrap();
//!
//! assert_eq!(error.message_for("uz"), "To'lov topilmadi");
//! ```

use crate::catalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// SDK-level error type
///
/// Raised only for local misuse; see the module docs for why network and
/// gateway failures never show up here.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A gateway error that was explicitly converted into a Rust error
    ///
    /// Produced by [`ApiResponse::into_result`](crate::ApiResponse::into_result)
    /// for callers that prefer `?` over inspecting the status flag.
    #[error("Gateway error: {0}")]
    Rpc(#[from] RpcErrorData),

    /// A transport-level failure converted into a Rust error
    ///
    /// Also only produced by `ApiResponse::into_result`.
    #[error("HTTP error [{code}]: {message}")]
    Http {
        /// Status code, or 0 when no response was received
        code: u16,
        /// Transport or status-line message
        message: String,
    },

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Client configuration is unusable
    ///
    /// Examples: a base URL that does not parse, or credentials containing
    /// characters that cannot appear in an HTTP header.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The underlying HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Observability pipeline could not be initialized
    #[error("Observability error: {0}")]
    Observability(String),
}

/// JSON-RPC error object returned by the gateway
///
/// Mirrors the `error` member of a gateway response. `message` is kept as a
/// raw JSON value because the gateway sends either a plain string or a
/// `{ru, uz, en}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorData {
    /// Numeric error code, resolvable through [`catalog::lookup`]
    pub code: i32,

    /// Plain string or localized `{ru, uz, en}` object
    #[serde(default)]
    pub message: serde_json::Value,

    /// Optional extra information, usually the name of the offending field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcErrorData {
    /// Create an error with a plain string message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: serde_json::Value::String(message.into()),
            data: None,
        }
    }

    /// Create an error with additional data
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: serde_json::Value::String(message.into()),
            data: Some(data),
        }
    }

    /// Resolve a human-readable message in the requested language
    ///
    /// Resolution order:
    /// 1. the gateway's own message for `lang`
    /// 2. the gateway's `en` message
    /// 3. a plain-string gateway message
    /// 4. [`catalog::lookup`] for `code`
    pub fn message_for(&self, lang: &str) -> String {
        match &self.message {
            serde_json::Value::Object(localized) => localized
                .get(lang)
                .or_else(|| localized.get(catalog::DEFAULT_LANG))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| catalog::lookup(self.code, lang).to_string()),
            serde_json::Value::String(text) if !text.is_empty() => text.clone(),
            _ => catalog::lookup(self.code, lang).to_string(),
        }
    }
}

impl std::fmt::Display for RpcErrorData {
    /// Formats as "[code] message" using the English message
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message_for(catalog::DEFAULT_LANG))
    }
}

impl std::error::Error for RpcErrorData {}
