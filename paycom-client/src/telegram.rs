//! Telegram Bot API notifier
//!
//! Posts `sendMessage` and `sendInvoice` calls so a shop can notify staff or
//! bill a customer through a bot. Responses go through the same
//! normalization as gateway calls; Telegram's `{"ok": false, ...}` replies
//! arrive with HTTP 4xx and therefore show up as `http_error`.

use crate::auth::Auth;
use crate::client_builder::{ApiFamily, ClientBuilder, TELEGRAM_BASE_URL};
use crate::dispatcher::Dispatcher;
use paycom_core::{ApiResponse, Result};
use serde_json::Value;

/// Telegram bot client
#[derive(Debug, Clone)]
pub struct TelegramBot {
    dispatcher: Dispatcher,
}

impl ApiFamily for TelegramBot {
    fn default_base_url(_is_test: bool) -> &'static str {
        TELEGRAM_BASE_URL
    }

    fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl TelegramBot {
    /// Bot client with default settings
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Builder for further configuration
    pub fn builder(token: impl Into<String>) -> ClientBuilder<Self> {
        ClientBuilder::new(Auth::bot_token(token))
    }

    /// Underlying dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Call any Bot API method with a JSON object of parameters
    pub async fn call(&self, method: &str, params: Value) -> ApiResponse {
        self.dispatcher.post_json(method, params).await
    }

    /// `sendMessage`
    pub async fn send_message(&self, params: Value) -> ApiResponse {
        self.call("sendMessage", params).await
    }

    /// `sendInvoice`
    pub async fn send_invoice(&self, params: Value) -> ApiResponse {
        self.call("sendInvoice", params).await
    }
}
