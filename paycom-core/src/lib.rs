//! Core types and utilities for the Payme gateway SDK
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Types**: the request envelope and the normalized [`ApiResponse`]
//! - **Methods**: wire method registries for the Merchant and Subscribe APIs
//! - **Catalog**: localized messages for the gateway's error codes
//! - **Params**: flattening nested parameters into bracket-keyed form pairs and back
//! - **Codec**: JSON encoding helpers
//! - **Error handling**: SDK errors and the wire error object
//! - **Observability**: tracing and OpenTelemetry setup
//!
//! The `paycom-client` crate builds the HTTP clients on top of this one.
//!
//! # Example
//!
//! ```rust
//! use paycom_core::{catalog, params, RequestEnvelope};
//! use serde_json::json;
//!
//! let envelope = RequestEnvelope::new("CheckTransaction", json!({"id": "abc"}));
//! assert_eq!(envelope.method, "CheckTransaction");
//!
//! assert_eq!(catalog::lookup(-31008, "en"), "Unable to perform the operation");
//!
//! let query = params::encode_parameters(json!({"account": {"order_id": 7}}).as_object().unwrap());
//! assert_eq!(query, "account[order_id]=7");
//! ```

pub mod catalog;
pub mod codec;
pub mod error;
pub mod methods;
pub mod observability;
pub mod params;
pub mod types;
pub mod util;

pub use error::{Error, Result, RpcErrorData};
pub use methods::{MerchantMethod, SubscribeMethod};
pub use observability::{
    init_observability, is_initialized, shutdown_observability, ObservabilityConfig,
};
pub use types::{
    ApiResponse, HttpMethod, HttpOutcome, RequestEnvelope, ResponseBody, TransportErrorKind,
};

/// Version of the gateway API contract this SDK targets
pub const API_VERSION: &str = "1.0.1";

/// Returns [`API_VERSION`]
pub fn api_version() -> &'static str {
    API_VERSION
}
