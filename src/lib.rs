//! Paycom - a client SDK for the Payme (paycom.uz) payment gateway
//!
//! This is the main convenience crate that re-exports the sub-crates.
//! Use this crate if you want a single dependency for everything.
//!
//! # Architecture
//!
//! - **paycom-core**: types, method registries, error catalog, parameter
//!   flattening, codec, error handling, observability
//! - **paycom-client**: HTTP dispatcher, client builder, Merchant and
//!   Subscribe API clients, Telegram notifier
//!
//! # Quick Start - Merchant API
//!
//! ```rust,no_run
//! use paycom::MerchantApi;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = MerchantApi::new("Paycom", "merchant-key", true)?;
//!
//!     let response = api
//!         .check_perform_transaction(500000, json!({"order_id": 1}))
//!         .await;
//!     println!("allowed: {}", response.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Quick Start - Subscribe API
//!
//! ```rust,no_run
//! use paycom::SubscribeApi;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = SubscribeApi::new(Some("merchant-id"), Some("key"), true)?;
//!
//!     let receipt = api.create_receipt(500000, json!({"order_id": 1}), None, None).await;
//!     if let Some(text) = receipt.error_text("uz") {
//!         eprintln!("{}", text);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub use paycom_client as client;
pub use paycom_core as core;

pub use paycom_client::{MerchantApi, SubscribeApi, TelegramBot};
pub use paycom_core::{ApiResponse, Error, HttpMethod, Result, API_VERSION};
