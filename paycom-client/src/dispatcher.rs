//! HTTP dispatcher shared by every API family
//!
//! The dispatcher turns `(method, params, verb)` into one HTTP round trip and
//! normalizes whatever happens into an [`ApiResponse`]. It never returns an
//! error: transport failures, HTTP error statuses and gateway errors all
//! end up as fields on the response.
//!
//! ```text
//! POST {base_url}
//! Content-Type: application/json
//! <auth>
//!
//! {"method": "...", "params": {...}, "id": <unix seconds>}
//! ```
//!
//! GET calls carry no body; `params` are flattened into the query string
//! instead (`?account[order_id]=7&amount=500`).

use crate::auth::Auth;
use crate::metrics::ClientMetrics;
use paycom_core::{
    codec, params, ApiResponse, HttpMethod, HttpOutcome, RequestEnvelope, TransportErrorKind,
};
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Instant;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends calls to one base URL with one set of credentials
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: reqwest::Client,
    base_url: String,
    auth: Auth,
    metrics: Option<Arc<ClientMetrics>>,
}

impl Dispatcher {
    /// Create a dispatcher
    ///
    /// A trailing `/` on `base_url` is dropped.
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        auth: Auth,
        metrics: Option<Arc<ClientMetrics>>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http,
            base_url,
            auth,
            metrics,
        }
    }

    /// Base URL every call goes to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials attached to every call
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Send a JSON-RPC style call
    ///
    /// `params` should be an object; any other value is sent as-is in the
    /// envelope and contributes nothing to a GET query string.
    pub async fn send(
        &self,
        method: &str,
        params: serde_json::Value,
        http_method: HttpMethod,
    ) -> ApiResponse {
        let started = Instant::now();

        let outcome = match self.prepare(method, &params, http_method) {
            Ok(request) => self.execute(request).await,
            Err(message) => HttpOutcome::Failed {
                kind: TransportErrorKind::Encode,
                message,
            },
        };

        let response = ApiResponse::from_outcome(method, params, http_method, outcome);
        self.finish(&response, started);
        response
    }

    /// POST `params` as the raw JSON body to `{base_url}/bot{token}/{method}`
    ///
    /// Used by the Telegram notifier: no envelope, no auth header.
    pub async fn post_json(&self, method: &str, params: serde_json::Value) -> ApiResponse {
        let started = Instant::now();

        let outcome = match codec::encode_value(&params) {
            Ok(body) => {
                let url = match self.auth.token() {
                    Some(token) => format!("{}/bot{}/{}", self.base_url, token, method),
                    None => format!("{}/{}", self.base_url, method),
                };
                tracing::debug!(method = %method, base_url = %self.base_url, "Posting JSON");

                let request = self
                    .http
                    .post(url)
                    .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                    .body(body);
                self.execute(request).await
            }
            Err(e) => HttpOutcome::Failed {
                kind: TransportErrorKind::Encode,
                message: e.to_string(),
            },
        };

        let response = ApiResponse::from_outcome(method, params, HttpMethod::Post, outcome);
        self.finish(&response, started);
        response
    }

    fn prepare(
        &self,
        method: &str,
        params: &serde_json::Value,
        http_method: HttpMethod,
    ) -> std::result::Result<reqwest::RequestBuilder, String> {
        let mut url = self.base_url.clone();
        let mut body = None;

        if http_method.sends_body() {
            let envelope = RequestEnvelope::new(method, params.clone());
            body = Some(codec::encode_envelope(&envelope).map_err(|e| e.to_string())?);
        } else if let Some(map) = params.as_object() {
            let query = params::encode_parameters(map);
            if !query.is_empty() {
                url.push(if url.contains('?') { '&' } else { '?' });
                url.push_str(&query);
            }
        }

        tracing::debug!(
            method = %method,
            http_method = %http_method,
            base_url = %self.base_url,
            auth = self.auth.scheme(),
            "Sending request"
        );

        let verb = match http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut request = self
            .http
            .request(verb, url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        request = self.auth.apply(request);
        if let Some(body) = body {
            request = request.body(body);
        }
        Ok(request)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> HttpOutcome {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return failed(e),
        };

        let status = response.status();
        let status_line = format!("{:?} {}", response.version(), status);

        match response.bytes().await {
            Ok(body) => HttpOutcome::Reply {
                status_code: status.as_u16(),
                status_line,
                body: body.to_vec(),
            },
            Err(e) => failed(e),
        }
    }

    fn finish(&self, response: &ApiResponse, started: Instant) {
        let duration = started.elapsed().as_secs_f64();
        let error_kind = failure_kind(response);

        match error_kind {
            None => tracing::debug!(
                method = %response.method,
                duration_secs = duration,
                "Request completed successfully"
            ),
            Some("rpc") => tracing::warn!(
                method = %response.method,
                http_status = ?response.http_status_code,
                error = ?response.error,
                "Gateway returned an error"
            ),
            Some(kind) => tracing::warn!(
                method = %response.method,
                kind = kind,
                http_status = ?response.http_status_code,
                error_code = response.error_code.as_deref().unwrap_or_default(),
                error_message = response.error_message.as_deref().unwrap_or_default(),
                "Request failed"
            ),
        }

        if let Some(ref m) = self.metrics {
            let status = if response.status { "success" } else { "error" };
            m.record_request(&response.method, status, duration);
            if let Some(kind) = error_kind {
                m.record_error(&response.method, kind);
            }
        }
    }
}

fn failed(error: reqwest::Error) -> HttpOutcome {
    let kind = if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Request
    };
    // reqwest error text includes the URL, which may carry a bot token.
    let message = error.without_url().to_string();
    HttpOutcome::Failed { kind, message }
}

fn failure_kind(response: &ApiResponse) -> Option<&'static str> {
    if response.status {
        None
    } else if response.http_error == Some(true) {
        Some("http")
    } else if response.error.is_some() {
        Some("rpc")
    } else {
        Some("transport")
    }
}
