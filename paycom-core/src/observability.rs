//! Logging, tracing and metrics setup
//!
//! The SDK itself only *emits* `tracing` events and OpenTelemetry metrics.
//! Applications that want them exported call [`init_observability`] once at
//! startup; libraries embedding the SDK should leave subscriber setup to
//! their host application.
//!
//! The pipeline:
//!
//! 1. `tracing` events and spans from the clients
//! 2. `EnvFilter` from `RUST_LOG` or [`ObservabilityConfig::log_level`]
//! 3. JSON `fmt` layer on stdout (when logs are enabled)
//! 4. `tracing-opentelemetry` layer exporting spans over OTLP/gRPC (when traces are enabled)
//! 5. a global meter provider exporting metrics every 30 seconds (when metrics are enabled)
//!
//! # Usage
//!
//! ```rust,no_run
//! use paycom_core::ObservabilityConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ObservabilityConfig::new("shop-backend")
//!         .with_endpoint("http://localhost:4317")
//!         .with_log_level("paycom_client=debug,info");
//!
//!     paycom_core::init_observability(config).expect("observability");
//!
//!     // ... make gateway calls ...
//!
//!     paycom_core::shutdown_observability();
//! }
//! ```

use crate::error::{Error, Result};
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Interval between metric exports
const METRICS_EXPORT_INTERVAL: Duration = Duration::from_secs(30);

/// Observability configuration
///
/// Defaults:
/// - service name `paycom`, version from Cargo
/// - OTLP endpoint from `OTEL_EXPORTER_OTLP_ENDPOINT`, else `http://localhost:4317`
/// - traces, metrics and logs enabled
/// - log level from `RUST_LOG`, else `info`
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to every span and metric
    pub service_name: String,
    /// Service version attached to every span and metric
    pub service_version: String,
    /// OTLP/gRPC collector endpoint
    pub otlp_endpoint: String,
    /// Export spans
    pub enable_traces: bool,
    /// Export metrics
    pub enable_metrics: bool,
    /// Print JSON logs to stdout
    pub enable_logs: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "paycom".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            otlp_endpoint: std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4317".to_string()),
            enable_traces: true,
            enable_metrics: true,
            enable_logs: true,
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl ObservabilityConfig {
    /// Defaults with a custom service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set the OTLP collector endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = endpoint.into();
        self
    }

    /// Set the fallback log filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the service version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    /// Toggle span export
    pub fn with_traces(mut self, enable: bool) -> Self {
        self.enable_traces = enable;
        self
    }

    /// Toggle metric export
    pub fn with_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    /// Toggle stdout logs
    pub fn with_logs(mut self, enable: bool) -> Self {
        self.enable_logs = enable;
        self
    }

    fn resource(&self) -> Resource {
        Resource::builder_empty()
            .with_attributes(vec![
                KeyValue::new(
                    opentelemetry_semantic_conventions::resource::SERVICE_NAME,
                    self.service_name.clone(),
                ),
                KeyValue::new(
                    opentelemetry_semantic_conventions::resource::SERVICE_VERSION,
                    self.service_version.clone(),
                ),
            ])
            .build()
    }
}

/// Providers installed by [`init_observability`], kept for shutdown
struct Providers {
    tracer: Option<SdkTracerProvider>,
    meter: Option<SdkMeterProvider>,
}

static PROVIDERS: OnceLock<Providers> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Whether [`init_observability`] has completed in this process
pub fn is_initialized() -> bool {
    PROVIDERS.get().is_some()
}

/// Install the tracing subscriber and OpenTelemetry providers
///
/// Runs once per process. Later calls return `Ok(())` without touching the
/// installed pipeline, so several clients may each ask for observability.
/// The global tracer and meter providers are only replaced after the
/// subscriber was installed successfully.
///
/// Must run inside a Tokio runtime when traces or metrics are enabled, since
/// the OTLP exporters use a gRPC channel.
///
/// # Errors
///
/// [`Error::Observability`] if an exporter cannot be built, the log filter
/// does not parse, or a foreign global subscriber is already installed.
pub fn init_observability(config: ObservabilityConfig) -> Result<()> {
    let _guard = INIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    if is_initialized() {
        tracing::debug!(service_name = %config.service_name, "Observability already initialized");
        return Ok(());
    }

    let tracer_provider = if config.enable_traces {
        Some(build_tracer_provider(&config)?)
    } else {
        None
    };
    let meter_provider = if config.enable_metrics {
        Some(build_meter_provider(&config)?)
    } else {
        None
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| Error::Observability(format!("invalid log filter: {}", e)))?;

    let telemetry_layer = tracer_provider.as_ref().map(|provider| {
        use opentelemetry::trace::TracerProvider as _;
        tracing_opentelemetry::layer().with_tracer(provider.tracer(config.service_name.clone()))
    });
    let fmt_layer = config.enable_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .json()
    });

    tracing_subscriber::registry()
        .with(telemetry_layer)
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Observability(e.to_string()))?;

    if let Some(provider) = &tracer_provider {
        global::set_tracer_provider(provider.clone());
    }
    if let Some(provider) = &meter_provider {
        global::set_meter_provider(provider.clone());
    }
    let _ = PROVIDERS.set(Providers {
        tracer: tracer_provider,
        meter: meter_provider,
    });

    tracing::info!(
        service_name = %config.service_name,
        otlp_endpoint = %config.otlp_endpoint,
        traces = config.enable_traces,
        metrics = config.enable_metrics,
        logs = config.enable_logs,
        "Observability initialized"
    );

    Ok(())
}

fn build_tracer_provider(config: &ObservabilityConfig) -> Result<SdkTracerProvider> {
    use opentelemetry_sdk::trace::{RandomIdGenerator, Sampler};

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build()
        .map_err(|e| Error::Observability(format!("span exporter: {}", e)))?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(config.resource())
        .with_sampler(Sampler::AlwaysOn)
        .with_id_generator(RandomIdGenerator::default())
        .build())
}

fn build_meter_provider(config: &ObservabilityConfig) -> Result<SdkMeterProvider> {
    use opentelemetry_sdk::metrics::PeriodicReader;

    let exporter = opentelemetry_otlp::MetricExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build()
        .map_err(|e| Error::Observability(format!("metric exporter: {}", e)))?;

    let reader = PeriodicReader::builder(exporter)
        .with_interval(METRICS_EXPORT_INTERVAL)
        .build();

    Ok(SdkMeterProvider::builder()
        .with_reader(reader)
        .with_resource(config.resource())
        .build())
}

/// Flush pending spans and metrics and stop the exporters
///
/// A no-op when [`init_observability`] never ran. Safe to call more than
/// once; later calls only log that the providers are already shut down.
pub fn shutdown_observability() {
    tracing::info!("Shutting down observability");

    let Some(providers) = PROVIDERS.get() else {
        return;
    };
    if let Some(tracer) = &providers.tracer {
        if let Err(e) = tracer.shutdown() {
            tracing::debug!(error = %e, "Tracer provider shutdown");
        }
    }
    if let Some(meter) = &providers.meter {
        if let Err(e) = meter.shutdown() {
            tracing::debug!(error = %e, "Meter provider shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "paycom");
        assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
        assert!(config.enable_traces);
        assert!(config.enable_metrics);
        assert!(config.enable_logs);
    }

    #[test]
    fn test_builder_chaining() {
        let config = ObservabilityConfig::new("billing")
            .with_endpoint("http://collector:4317")
            .with_log_level("debug")
            .with_version("2.1.0")
            .with_traces(false)
            .with_metrics(false)
            .with_logs(true);

        assert_eq!(config.service_name, "billing");
        assert_eq!(config.otlp_endpoint, "http://collector:4317");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.service_version, "2.1.0");
        assert!(!config.enable_traces);
        assert!(!config.enable_metrics);
        assert!(config.enable_logs);
    }

    #[test]
    fn test_shutdown_without_init_is_noop() {
        assert!(!is_initialized());
        shutdown_observability();
        shutdown_observability();
        assert!(!is_initialized());
    }
}
