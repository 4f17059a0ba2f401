//! Small helpers shared by the clients
//!
//! - [`secure_compare`] for checking credentials sent by the gateway
//! - wall-clock helpers for request ids and transaction timestamps

use std::time::{SystemTime, UNIX_EPOCH};
use subtle::ConstantTimeEq;

/// Compare two strings in time independent of where they differ
///
/// Use this when checking a secret received from the outside (for example
/// the password in the `Authorization` header of a merchant callback)
/// against the expected one. Strings of different length compare unequal.
pub fn secure_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Current Unix time in whole seconds
///
/// Used as the JSON-RPC `id` of outgoing requests. Two calls within the
/// same second share an id.
pub fn current_time_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current Unix time in milliseconds
///
/// The Merchant API expresses transaction times in milliseconds.
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
