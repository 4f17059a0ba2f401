//! HTTP clients for the Payme (paycom.uz) payment gateway
//!
//! This crate provides typed clients for the gateway's API families. Every
//! call is a single async HTTP round trip that always yields a normalized
//! [`ApiResponse`](paycom_core::ApiResponse); check `status` and the error
//! fields instead of matching on a `Result`.
//!
//! # Core Features
//!
//! - **Merchant API**: transaction lifecycle with HTTP Basic auth
//! - **Subscribe API**: card tokenization and receipts with `X-Auth`
//! - **Telegram notifier**: `sendMessage` / `sendInvoice` through a bot
//! - **Builder**: test/production switch, base URL override, timeouts
//! - **Observability**: tracing events plus OpenTelemetry metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paycom_client::MerchantApi;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = MerchantApi::new("Paycom", "merchant-key", true)?;
//!
//!     let response = api.check_transaction("5305e3bab097f420a62ced0b").await;
//!     match response.result() {
//!         Some(result) => println!("state: {}", result["state"]),
//!         None => println!("error: {:?}", response.error_text("ru")),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Raw Calls
//!
//! ```rust,no_run
//! use paycom_client::SubscribeApi;
//! use paycom_core::HttpMethod;
//! use serde_json::json;
//!
//! # async fn example() -> paycom_core::Result<()> {
//! let api = SubscribeApi::builder(Some("merchant-id"), Some("key"))
//!     .base_url("http://localhost:8080/api")
//!     .build()?;
//!
//! let response = api
//!     .dispatcher()
//!     .send("receipts.get", json!({"id": "r1"}), HttpMethod::Get)
//!     .await;
//! # Ok(())
//! # }
//! ```

mod auth;
mod client_builder;
mod dispatcher;
mod merchant;
mod metrics;
mod subscribe;
mod telegram;

pub use auth::{Auth, X_AUTH_HEADER};
pub use client_builder::{
    ApiFamily, ClientBuilder, BASE_TEST_URL, BASE_URL, DEFAULT_TIMEOUT, TELEGRAM_BASE_URL,
};
pub use dispatcher::Dispatcher;
pub use merchant::{FiscalReceiptType, MerchantApi};
pub use metrics::ClientMetrics;
pub use subscribe::SubscribeApi;
pub use telegram::TelegramBot;
