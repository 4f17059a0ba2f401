//! Client builder for configuring endpoints, timeouts and observability
//!
//! Every API family is created through a [`ClientBuilder`]. It lets you:
//! - Switch between the production and test gateway
//! - Override the base URL (takes precedence over the test flag)
//! - Set the request timeout
//! - Configure observability (OpenTelemetry) and client metrics
//!
//! # Examples
//!
//! ```rust,no_run
//! use paycom_client::{MerchantApi, SubscribeApi};
//! use std::time::Duration;
//!
//! # fn example() -> paycom_core::Result<()> {
//! // Test gateway, shorter timeout
//! let merchant = MerchantApi::builder("Paycom", "merchant-key")
//!     .test_mode(true)
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! // With observability
//! let subscribe = SubscribeApi::builder(Some("merchant-id"), Some("key"))
//!     .with_default_observability()
//!     .service_name("checkout")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::auth::Auth;
use crate::dispatcher::Dispatcher;
use crate::metrics::ClientMetrics;
use paycom_core::{Error, ObservabilityConfig, Result};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

/// Production gateway endpoint
pub const BASE_URL: &str = "https://checkout.paycom.uz/api";

/// Test gateway endpoint
pub const BASE_TEST_URL: &str = "https://checkout.test.paycom.uz/api";

/// Telegram Bot API endpoint
pub const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Timeout applied to every call unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A client family that can be built from a configured [`Dispatcher`]
pub trait ApiFamily: Sized {
    /// Endpoint used when no base URL override is given
    fn default_base_url(is_test: bool) -> &'static str;

    /// Wrap a ready dispatcher
    fn from_dispatcher(dispatcher: Dispatcher) -> Self;
}

/// Builder for configuring and creating an API client
pub struct ClientBuilder<T> {
    auth: Auth,
    base_url: Option<String>,
    is_test: bool,
    timeout: Duration,
    observability_config: Option<ObservabilityConfig>,
    service_name: Option<String>,
    enable_metrics: bool,
    _family: PhantomData<fn() -> T>,
}

impl<T: ApiFamily> ClientBuilder<T> {
    /// Create a builder with the given credentials
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: None,
            is_test: false,
            timeout: DEFAULT_TIMEOUT,
            observability_config: None,
            service_name: None,
            enable_metrics: false,
            _family: PhantomData,
        }
    }

    /// Use the test gateway instead of production
    pub fn test_mode(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }

    /// Send every call to this URL instead of the family's default
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-call timeout (connect plus response)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable OpenTelemetry observability with custom configuration
    pub fn with_observability(mut self, config: ObservabilityConfig) -> Self {
        self.observability_config = Some(config);
        self
    }

    /// Enable OpenTelemetry observability with default configuration
    pub fn with_default_observability(mut self) -> Self {
        self.observability_config = Some(ObservabilityConfig::default());
        self
    }

    /// Set service name for observability and metrics
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Record client metrics on the global meter provider
    ///
    /// Implied by [`with_observability`](Self::with_observability). Use this
    /// alone when the host application installs its own meter provider.
    pub fn with_metrics(mut self) -> Self {
        self.enable_metrics = true;
        self
    }

    /// Endpoint the built client will call
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| T::default_base_url(self.is_test))
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] for an unparseable base URL or credentials
    ///   that cannot be sent
    /// - [`Error::Client`] if the HTTP client cannot be constructed
    /// - [`Error::Observability`] if observability setup fails
    pub fn build(self) -> Result<T> {
        let base_url = self.resolved_base_url().to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| Error::InvalidConfig(format!("invalid base URL {:?}: {}", base_url, e)))?;
        self.auth.validate()?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Client(format!("failed to build HTTP client: {}", e)))?;

        let metrics_name = if let Some(mut config) = self.observability_config {
            if let Some(name) = self.service_name.as_ref() {
                config.service_name = name.clone();
            }
            paycom_core::init_observability(config.clone())?;
            Some(config.service_name)
        } else if self.enable_metrics {
            Some(self.service_name.unwrap_or_else(|| "paycom".to_string()))
        } else {
            None
        };
        let metrics = metrics_name.map(|name| Arc::new(ClientMetrics::new(name)));

        tracing::debug!(
            base_url = %base_url,
            auth = self.auth.scheme(),
            timeout_secs = self.timeout.as_secs_f64(),
            "Client configured"
        );

        Ok(T::from_dispatcher(Dispatcher::new(
            http, base_url, self.auth, metrics,
        )))
    }
}

impl<T> std::fmt::Debug for ClientBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("auth", &self.auth)
            .field("base_url", &self.base_url)
            .field("is_test", &self.is_test)
            .field("timeout", &self.timeout)
            .field("service_name", &self.service_name)
            .field("enable_metrics", &self.enable_metrics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(Dispatcher);

    impl ApiFamily for Probe {
        fn default_base_url(is_test: bool) -> &'static str {
            if is_test {
                BASE_TEST_URL
            } else {
                BASE_URL
            }
        }

        fn from_dispatcher(dispatcher: Dispatcher) -> Self {
            Probe(dispatcher)
        }
    }

    #[test]
    fn test_builder_defaults() {
        let builder = ClientBuilder::<Probe>::new(Auth::None);

        assert!(!builder.is_test);
        assert_eq!(builder.timeout, DEFAULT_TIMEOUT);
        assert!(builder.base_url.is_none());
        assert!(builder.observability_config.is_none());
        assert!(builder.service_name.is_none());
        assert!(!builder.enable_metrics);
        assert_eq!(builder.resolved_base_url(), BASE_URL);
    }

    #[test]
    fn test_builder_test_mode() {
        let builder = ClientBuilder::<Probe>::new(Auth::None).test_mode(true);
        assert_eq!(builder.resolved_base_url(), BASE_TEST_URL);
    }

    #[test]
    fn test_override_wins_over_test_flag() {
        let builder = ClientBuilder::<Probe>::new(Auth::None)
            .test_mode(true)
            .base_url("http://127.0.0.1:9000/api");
        assert_eq!(builder.resolved_base_url(), "http://127.0.0.1:9000/api");
    }

    #[test]
    fn test_builder_observability_config() {
        let config = ObservabilityConfig::new("test-client")
            .with_endpoint("http://localhost:4317")
            .with_log_level("debug");

        let builder = ClientBuilder::<Probe>::new(Auth::None).with_observability(config);

        let obs_config = builder.observability_config.unwrap();
        assert_eq!(obs_config.service_name, "test-client");
        assert_eq!(obs_config.log_level, "debug");
    }

    #[test]
    fn test_builder_chaining() {
        let builder = ClientBuilder::<Probe>::new(Auth::basic("Paycom", "key"))
            .timeout(Duration::from_secs(5))
            .service_name("test-service")
            .with_metrics()
            .with_default_observability();

        assert_eq!(builder.timeout, Duration::from_secs(5));
        assert!(builder.enable_metrics);
        assert!(builder.observability_config.is_some());
        assert_eq!(builder.service_name, Some("test-service".to_string()));
    }

    #[test]
    fn test_build_uses_resolved_url() {
        let probe = ClientBuilder::<Probe>::new(Auth::None)
            .base_url("http://127.0.0.1:9000/api/")
            .build()
            .unwrap();
        assert_eq!(probe.0.base_url(), "http://127.0.0.1:9000/api");
    }

    #[test]
    fn test_build_rejects_bad_url() {
        let result = ClientBuilder::<Probe>::new(Auth::None)
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_build_rejects_bad_credentials() {
        let result = ClientBuilder::<Probe>::new(Auth::x_auth(Some("id\r\n"), None)).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_build_with_metrics_only() {
        let probe = ClientBuilder::<Probe>::new(Auth::None)
            .with_metrics()
            .service_name("metrics-only")
            .build()
            .unwrap();
        assert_eq!(probe.0.base_url(), BASE_URL);
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let builder = ClientBuilder::<Probe>::new(Auth::basic("Paycom", "hunter2"));
        assert!(!format!("{:?}", builder).contains("hunter2"));
    }
}
