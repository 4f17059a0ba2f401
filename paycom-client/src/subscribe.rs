//! Subscribe API client
//!
//! Card tokenization and receipt payments. Calls authenticate with the
//! `X-Auth` header built from the merchant id and, for server-side calls,
//! the merchant key. Front-end integrations omit the key and are limited to
//! the `cards.*` methods plus `receipts.pay`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use paycom_client::SubscribeApi;
//! use serde_json::json;
//!
//! # async fn example() -> paycom_core::Result<()> {
//! let api = SubscribeApi::new(Some("merchant-id"), Some("merchant-key"), true)?;
//!
//! let card = api.create_card("8600069195406311", "0399", true, None, None).await;
//! let token = card
//!     .result()
//!     .and_then(|r| r["card"]["token"].as_str())
//!     .unwrap_or_default()
//!     .to_string();
//!
//! let receipt = api.create_receipt(500000, json!({"order_id": 42}), Some("Order #42"), None).await;
//! # Ok(())
//! # }
//! ```

use crate::auth::Auth;
use crate::client_builder::{ApiFamily, ClientBuilder, BASE_TEST_URL, BASE_URL};
use crate::dispatcher::Dispatcher;
use paycom_core::params::truthy;
use paycom_core::{ApiResponse, HttpMethod, Result, SubscribeMethod};
use serde_json::{json, Map, Value};

/// Subscribe API client
#[derive(Debug, Clone)]
pub struct SubscribeApi {
    dispatcher: Dispatcher,
}

impl ApiFamily for SubscribeApi {
    fn default_base_url(is_test: bool) -> &'static str {
        if is_test {
            BASE_TEST_URL
        } else {
            BASE_URL
        }
    }

    fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

/// Insert `value` under `key` only when it is truthy
fn insert_optional(params: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value.filter(truthy) {
        params.insert(key.to_string(), value);
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

impl SubscribeApi {
    /// Client with default timeout against the production or test gateway
    ///
    /// Pass `key = None` for front-end calls.
    pub fn new(id: Option<&str>, key: Option<&str>, is_test: bool) -> Result<Self> {
        Self::builder(id, key).test_mode(is_test).build()
    }

    /// Builder for further configuration
    pub fn builder(id: Option<&str>, key: Option<&str>) -> ClientBuilder<Self> {
        ClientBuilder::new(Auth::x_auth(id, key))
    }

    /// Underlying dispatcher, for calls this client has no method for
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    async fn call(&self, method: SubscribeMethod, params: Map<String, Value>) -> ApiResponse {
        self.dispatcher
            .send(method.as_str(), Value::Object(params), HttpMethod::Post)
            .await
    }

    /// Tokenize a card
    ///
    /// `expire` is `MMYY`. `customer` and `account` are sent only when
    /// non-empty.
    pub async fn create_card(
        &self,
        number: &str,
        expire: &str,
        save: bool,
        customer: Option<&str>,
        account: Option<Value>,
    ) -> ApiResponse {
        let mut params = object(json!({
            "card": { "number": number, "expire": expire },
            "save": save,
        }));
        insert_optional(&mut params, "customer", customer.map(Value::from));
        insert_optional(&mut params, "account", account);

        self.call(SubscribeMethod::CardsCreate, params).await
    }

    /// Send an SMS verification code for a card token
    pub async fn get_verify_code(&self, token: &str) -> ApiResponse {
        self.call(SubscribeMethod::CardsGetVerifyCode, object(json!({ "token": token })))
            .await
    }

    /// Verify a card token with the SMS code
    pub async fn verify_card(&self, token: &str, code: &str) -> ApiResponse {
        self.call(
            SubscribeMethod::CardsVerify,
            object(json!({ "token": token, "code": code })),
        )
        .await
    }

    /// Check a card token
    pub async fn check_card(&self, token: &str) -> ApiResponse {
        self.call(SubscribeMethod::CardsCheck, object(json!({ "token": token })))
            .await
    }

    /// Delete a card token
    pub async fn remove_card(&self, token: &str) -> ApiResponse {
        self.call(SubscribeMethod::CardsRemove, object(json!({ "token": token })))
            .await
    }

    /// Create a receipt for `amount` tiyin
    pub async fn create_receipt(
        &self,
        amount: i64,
        account: Value,
        description: Option<&str>,
        detail: Option<Value>,
    ) -> ApiResponse {
        let mut params = object(json!({ "amount": amount, "account": account }));
        insert_optional(&mut params, "description", description.map(Value::from));
        insert_optional(&mut params, "detail", detail);

        self.call(SubscribeMethod::ReceiptsCreate, params).await
    }

    /// Pay a receipt with a card token
    pub async fn pay_receipt(&self, id: &str, token: &str, payer: Option<Value>) -> ApiResponse {
        let mut params = object(json!({ "id": id, "token": token }));
        insert_optional(&mut params, "payer", payer);

        self.call(SubscribeMethod::ReceiptsPay, params).await
    }

    /// Send a receipt to a phone number by SMS
    pub async fn send_receipt(&self, id: &str, phone: &str) -> ApiResponse {
        self.call(
            SubscribeMethod::ReceiptsSend,
            object(json!({ "id": id, "phone": phone })),
        )
        .await
    }

    /// Cancel a receipt
    pub async fn cancel_receipt(&self, id: &str) -> ApiResponse {
        self.call(SubscribeMethod::ReceiptsCancel, object(json!({ "id": id })))
            .await
    }

    /// Query the state of a receipt
    pub async fn check_receipt(&self, id: &str) -> ApiResponse {
        self.call(SubscribeMethod::ReceiptsCheck, object(json!({ "id": id })))
            .await
    }

    /// Fetch a receipt
    pub async fn get_receipt(&self, id: &str) -> ApiResponse {
        self.call(SubscribeMethod::ReceiptsGet, object(json!({ "id": id })))
            .await
    }

    /// List receipts created between `from` and `to` (Unix milliseconds)
    pub async fn get_all_receipts(&self, count: u32, from: i64, to: i64, offset: u32) -> ApiResponse {
        self.call(
            SubscribeMethod::ReceiptsGetAll,
            object(json!({ "count": count, "from": from, "to": to, "offset": offset })),
        )
        .await
    }

    /// Attach fiscal receipt data to a paid receipt
    pub async fn set_fiscal_data(&self, id: &str, fiscal_data: Value) -> ApiResponse {
        self.call(
            SubscribeMethod::ReceiptsSetFiscalData,
            object(json!({ "id": id, "fiscal_data": fiscal_data })),
        )
        .await
    }

    /// Confirm a held payment
    pub async fn confirm_hold(&self, id: &str) -> ApiResponse {
        self.call(SubscribeMethod::ReceiptsConfirmHold, object(json!({ "id": id })))
            .await
    }
}
