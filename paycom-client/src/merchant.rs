//! Merchant API client
//!
//! Operations a merchant calls on the gateway about its own transactions.
//! Every call authenticates with HTTP Basic using the merchant login
//! (usually `Paycom`) and the cash-desk key.
//!
//! # Examples
//!
//! ```rust,no_run
//! use paycom_client::MerchantApi;
//! use serde_json::json;
//!
//! # async fn example() -> paycom_core::Result<()> {
//! let api = MerchantApi::new("Paycom", "merchant-key", true)?;
//!
//! let response = api
//!     .create_transaction("5305e3bab097f420a62ced0b", 1399114284039, 500000, json!({"order_id": 1}))
//!     .await;
//!
//! if response.status {
//!     println!("created: {:?}", response.result());
//! } else {
//!     println!("failed: {:?}", response.error_text("en"));
//! }
//! # Ok(())
//! # }
//! ```

use crate::auth::Auth;
use crate::client_builder::{ApiFamily, ClientBuilder, BASE_TEST_URL, BASE_URL};
use crate::dispatcher::Dispatcher;
use paycom_core::{ApiResponse, HttpMethod, MerchantMethod, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Which fiscal receipt [`MerchantApi::set_fiscal_data`] attaches data to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FiscalReceiptType {
    /// Receipt issued when the transaction was performed
    Perform,
    /// Receipt issued when the transaction was cancelled
    Cancel,
}

impl FiscalReceiptType {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            FiscalReceiptType::Perform => "PERFORM",
            FiscalReceiptType::Cancel => "CANCEL",
        }
    }
}

/// Merchant API client
#[derive(Debug, Clone)]
pub struct MerchantApi {
    dispatcher: Dispatcher,
}

impl ApiFamily for MerchantApi {
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

impl MerchantApi {
    /// Client with default timeout against the production or test gateway
    pub fn new(login: impl Into<String>, password: impl Into<String>, is_test: bool) -> Result<Self> {
        Self::builder(login, password).test_mode(is_test).build()
    }

    /// Builder for further configuration
    pub fn builder(login: impl Into<String>, password: impl Into<String>) -> ClientBuilder<Self> {
        ClientBuilder::new(Auth::basic(login, password))
    }

    /// Underlying dispatcher, for calls this client has no method for
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    async fn call(&self, method: MerchantMethod, params: Value) -> ApiResponse {
        self.dispatcher
            .send(method.as_str(), params, HttpMethod::Post)
            .await
    }

    /// Ask whether a payment of `amount` (tiyin) for `account` can be made
    pub async fn check_perform_transaction(&self, amount: i64, account: Value) -> ApiResponse {
        self.call(
            MerchantMethod::CheckPerformTransaction,
            json!({ "amount": amount, "account": account }),
        )
        .await
    }

    /// Create a transaction
    ///
    /// `time` is the creation time in Unix milliseconds.
    pub async fn create_transaction(
        &self,
        id: &str,
        time: i64,
        amount: i64,
        account: Value,
    ) -> ApiResponse {
        self.call(
            MerchantMethod::CreateTransaction,
            json!({ "id": id, "time": time, "amount": amount, "account": account }),
        )
        .await
    }

    /// Perform a created transaction
    pub async fn perform_transaction(&self, id: &str) -> ApiResponse {
        self.call(MerchantMethod::PerformTransaction, json!({ "id": id }))
            .await
    }

    /// Cancel a transaction with a gateway reason code
    pub async fn cancel_transaction(&self, id: &str, reason: i32) -> ApiResponse {
        self.call(
            MerchantMethod::CancelTransaction,
            json!({ "id": id, "reason": reason }),
        )
        .await
    }

    /// Query the state of a transaction
    pub async fn check_transaction(&self, id: &str) -> ApiResponse {
        self.call(MerchantMethod::CheckTransaction, json!({ "id": id }))
            .await
    }

    /// List transactions created between `from` and `to` (Unix milliseconds)
    pub async fn get_statement(&self, from: i64, to: i64) -> ApiResponse {
        self.call(MerchantMethod::GetStatement, json!({ "from": from, "to": to }))
            .await
    }

    /// Attach fiscal receipt data to a transaction
    pub async fn set_fiscal_data(
        &self,
        id: &str,
        receipt_type: FiscalReceiptType,
        fiscal_data: Value,
    ) -> ApiResponse {
        self.call(
            MerchantMethod::SetFiscalData,
            json!({ "id": id, "type": receipt_type.as_str(), "fiscal_data": fiscal_data }),
        )
        .await
    }
}
