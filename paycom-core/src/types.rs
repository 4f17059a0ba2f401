//! Request and response types shared by every API family
//!
//! # Request Envelope
//!
//! Every Merchant and Subscribe call carries the same JSON body:
//!
//! ```json
//! {"method": "receipts.create", "params": {...}, "id": 1690000000}
//! ```
//!
//! The `id` is the Unix time in seconds at send time. It is only used by the
//! gateway to echo back; uniqueness is best-effort.
//!
//! # Normalized Response
//!
//! [`ApiResponse`] is what every call returns, whether the network failed,
//! the gateway rejected the call, or everything went fine. Inspect `status`
//! first, then the error fields that match the failure kind:
//!
//! | failure | fields set |
//! |---|---|
//! | none | `status = true` |
//! | transport (DNS, TLS, timeout) | `http_error`, `http_error_message`, `http_status_code = 0`, `error_code`, `error_message` |
//! | HTTP status >= 400 | same as transport, with the real status code |
//! | gateway `error` member | `http_error = false`, `http_status_code`, `error` |
//!
//! `body` always holds whatever the gateway sent back.

use crate::error::{Error, RpcErrorData};
use crate::util::current_time_secs;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// HTTP verb used for a call
///
/// The gateway only accepts POST; the other verbs exist for completeness of
/// the dispatcher and for proxies that route on verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Upper-case verb name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// GET sends params in the query string; every other verb sends the
    /// JSON envelope as the body
    pub fn sends_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = std::convert::Infallible;

    /// Case-insensitive. Unknown verbs become POST.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            _ => HttpMethod::Post,
        })
    }
}

/// The JSON body sent with every Merchant and Subscribe call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Wire method name
    pub method: String,
    /// Parameter object
    pub params: serde_json::Value,
    /// Unix seconds at send time
    pub id: u64,
}

impl RequestEnvelope {
    /// Create an envelope stamped with the current time
    pub fn new(method: impl Into<String>, params: serde_json::Value) -> Self {
        Self::with_id(method, params, current_time_secs())
    }

    /// Create an envelope with an explicit id
    pub fn with_id(method: impl Into<String>, params: serde_json::Value, id: u64) -> Self {
        Self {
            method: method.into(),
            params,
            id,
        }
    }
}

/// Response body as received
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResponseBody {
    /// Body decoded as JSON
    Json(serde_json::Value),
    /// Body that is not valid JSON, kept byte for byte
    Raw(Vec<u8>),
    /// Nothing was received
    #[default]
    Empty,
}

impl ResponseBody {
    /// Decode raw bytes, keeping them verbatim if they are not JSON
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return ResponseBody::Empty;
        }
        match serde_json::from_slice(&bytes) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Raw(bytes),
        }
    }

    /// The decoded JSON, if any
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The undecodable bytes, if any
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            ResponseBody::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Look up a top-level member of a JSON object body
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.as_json().and_then(|v| v.get(key))
    }
}

impl Serialize for ResponseBody {
    /// JSON bodies serialize as themselves, raw bodies as lossy UTF-8 text,
    /// empty bodies as `null`
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseBody::Json(value) => value.serialize(serializer),
            ResponseBody::Raw(bytes) => serializer.serialize_str(&String::from_utf8_lossy(bytes)),
            ResponseBody::Empty => serializer.serialize_none(),
        }
    }
}

/// Kind of transport failure, reported as `error_code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The call did not complete within the configured timeout
    Timeout,
    /// DNS, TCP or TLS failure while connecting
    Connect,
    /// Any other failure while sending or receiving
    Request,
    /// The request body could not be encoded
    Encode,
}

impl TransportErrorKind {
    /// Short code stored in `ApiResponse::error_code`
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Request => "request",
            TransportErrorKind::Encode => "encode",
        }
    }
}

/// What came back from the network, before normalization
#[derive(Debug, Clone)]
pub enum HttpOutcome {
    /// A response was received (any status)
    Reply {
        /// Numeric status code
        status_code: u16,
        /// Status line, e.g. `HTTP/1.1 404 Not Found`
        status_line: String,
        /// Raw body bytes
        body: Vec<u8>,
    },
    /// No response was received
    Failed {
        /// Failure kind
        kind: TransportErrorKind,
        /// Human-readable transport message
        message: String,
    },
}

/// Normalized result of a single call
///
/// Serializes to JSON with camelCase member names; absent optional members
/// are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// True only when the HTTP exchange succeeded and the body carries no `error`
    pub status: bool,
    /// Whatever the server returned
    pub body: ResponseBody,
    /// Wire method (or Telegram method) that was called
    pub method: String,
    /// Parameters that were sent
    pub params: serde_json::Value,
    /// Verb that was used
    pub http_method: HttpMethod,
    /// True for HTTP status >= 400, false for other failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error: Option<bool>,
    /// Status line or transport message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error_message: Option<String>,
    /// HTTP status code, 0 when nothing was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<u16>,
    /// Transport failure kind or HTTP status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Transport or HTTP error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// The gateway's `error` member, verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl ApiResponse {
    /// Normalize a network outcome into a response
    pub fn from_outcome(
        method: impl Into<String>,
        params: serde_json::Value,
        http_method: HttpMethod,
        outcome: HttpOutcome,
    ) -> Self {
        let mut response = Self {
            status: false,
            body: ResponseBody::Empty,
            method: method.into(),
            params,
            http_method,
            http_error: None,
            http_error_message: None,
            http_status_code: None,
            error_code: None,
            error_message: None,
            error: None,
        };

        match outcome {
            HttpOutcome::Failed { kind, message } => {
                response.http_error = Some(false);
                response.http_error_message = Some(message.clone());
                response.http_status_code = Some(0);
                response.error_code = Some(kind.as_str().to_string());
                response.error_message = Some(message);
            }
            HttpOutcome::Reply {
                status_code,
                status_line,
                body,
            } => {
                response.body = ResponseBody::from_bytes(body);
                let rpc_error = response.body.get("error").filter(|e| is_error_member(e)).cloned();

                if status_code >= 400 {
                    response.http_error = Some(true);
                    response.http_error_message = Some(status_line.clone());
                    response.http_status_code = Some(status_code);
                    response.error_code = Some(status_code.to_string());
                    response.error_message = Some(status_line);
                } else if let Some(error) = rpc_error {
                    response.http_error = Some(false);
                    response.http_status_code = Some(status_code);
                    response.error = Some(error);
                } else {
                    response.status = true;
                }
            }
        }

        response
    }

    /// Whether the call succeeded
    pub fn is_success(&self) -> bool {
        self.status
    }

    /// The `result` member of a successful JSON-RPC reply
    pub fn result(&self) -> Option<&serde_json::Value> {
        if self.status {
            self.body.get("result")
        } else {
            None
        }
    }

    /// The gateway error parsed into `{code, message, data}`
    ///
    /// `None` when there is no `error` member or it does not carry a numeric
    /// code.
    pub fn rpc_error(&self) -> Option<RpcErrorData> {
        self.error
            .as_ref()
            .and_then(|e| serde_json::from_value(e.clone()).ok())
    }

    /// A human-readable description of the failure in `lang`
    ///
    /// Gateway errors resolve through [`RpcErrorData::message_for`]; HTTP and
    /// transport failures use `error_message`. `None` on success.
    pub fn error_text(&self, lang: &str) -> Option<String> {
        if self.status {
            return None;
        }
        if let Some(rpc) = self.rpc_error() {
            return Some(rpc.message_for(lang));
        }
        if let Some(error) = &self.error {
            return Some(error.to_string());
        }
        self.error_message.clone()
    }

    /// Convert into a `Result`, yielding `result` (or the whole body) on success
    ///
    /// For callers that prefer `?` over checking `status`.
    pub fn into_result(self) -> crate::Result<serde_json::Value> {
        if self.status {
            return Ok(match self.body {
                ResponseBody::Json(serde_json::Value::Object(mut map)) if map.contains_key("result") => {
                    map.remove("result").unwrap_or(serde_json::Value::Null)
                }
                ResponseBody::Json(value) => value,
                ResponseBody::Raw(bytes) => {
                    serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
                }
                ResponseBody::Empty => serde_json::Value::Null,
            });
        }

        if let Some(rpc) = self.rpc_error() {
            return Err(Error::Rpc(rpc));
        }
        if let Some(error) = self.error {
            return Err(Error::Rpc(RpcErrorData::with_data(0, error.to_string(), error)));
        }
        Err(Error::Http {
            code: self.http_status_code.unwrap_or(0),
            message: self.error_message.unwrap_or_default(),
        })
    }
}

/// Whether a decoded `error` member fails the call
///
/// Any JSON object counts, even `{}`. Other values follow
/// [`truthy`](crate::params::truthy), so `null`, `false` and `""` do not.
fn is_error_member(error: &serde_json::Value) -> bool {
    error.is_object() || crate::params::truthy(error)
}
