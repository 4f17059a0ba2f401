//! Client metrics definitions
//!
//! OpenTelemetry instruments recorded by the dispatcher when metrics are
//! enabled on the [`ClientBuilder`](crate::ClientBuilder):
//!
//! - **requests_total**: calls made, by wire method and outcome (counter)
//! - **request_duration**: round-trip time in seconds (histogram)
//! - **errors_total**: failed calls, by failure kind (counter)
//!
//! Failure kinds are `transport`, `http` and `rpc`, matching the three ways
//! an [`ApiResponse`](paycom_core::ApiResponse) can carry `status = false`.

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};

/// Client metrics for monitoring gateway calls
pub struct ClientMetrics {
    /// Total number of calls made
    pub requests_total: Counter<u64>,
    /// Call duration in seconds
    pub request_duration: Histogram<f64>,
    /// Total number of failed calls
    pub errors_total: Counter<u64>,
}

impl ClientMetrics {
    /// Create metrics on the global meter provider
    pub fn new(service_name: impl Into<String>) -> Self {
        let meter = global::meter_with_scope(
            opentelemetry::InstrumentationScope::builder(service_name.into()).build(),
        );
        Self::new_with_meter(&meter)
    }

    /// Create metrics on a specific meter
    pub fn new_with_meter(meter: &Meter) -> Self {
        Self {
            requests_total: meter
                .u64_counter("paycom.client.requests.total")
                .with_description("Total number of gateway calls")
                .build(),
            request_duration: meter
                .f64_histogram("paycom.client.request.duration")
                .with_description("Gateway call duration in seconds")
                .with_unit("s")
                .build(),
            errors_total: meter
                .u64_counter("paycom.client.errors.total")
                .with_description("Total number of failed gateway calls")
                .build(),
        }
    }

    /// Record a finished call
    pub fn record_request(&self, method: &str, status: &str, duration_secs: f64) {
        let attributes = &[
            KeyValue::new("method", method.to_string()),
            KeyValue::new("status", status.to_string()),
        ];
        self.requests_total.add(1, attributes);
        self.request_duration.record(duration_secs, attributes);
    }

    /// Record a failure
    pub fn record_error(&self, method: &str, error_kind: &str) {
        let attributes = &[
            KeyValue::new("method", method.to_string()),
            KeyValue::new("error_kind", error_kind.to_string()),
        ];
        self.errors_total.add(1, attributes);
    }
}

impl std::fmt::Debug for ClientMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientMetrics").finish_non_exhaustive()
    }
}
