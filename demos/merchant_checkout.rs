//! Merchant API walkthrough
//!
//! Creates, performs and checks a transaction against the test gateway,
//! printing the normalized response of every step.
//!
//! Run with: PAYCOM_KEY=... cargo run --example merchant_checkout

use paycom::MerchantApi;
use paycom_core::util::current_time_millis;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("paycom_client=debug,info")
        .init();

    let key = std::env::var("PAYCOM_KEY").unwrap_or_default();
    let api = MerchantApi::new("Paycom", key, true)?;

    let account = json!({"order_id": 1});
    let check = api.check_perform_transaction(500000, account.clone()).await;
    println!("CheckPerformTransaction: {}", paycom_core::codec::encode_response(&check)?);
    if !check.status {
        println!("Cannot pay: {:?}", check.error_text("en"));
        return Ok(());
    }

    let transaction_id = format!("demo-{}", current_time_millis());
    let created = api
        .create_transaction(&transaction_id, current_time_millis() as i64, 500000, account)
        .await;
    println!("CreateTransaction: {}", serde_json::to_string_pretty(&created)?);

    let performed = api.perform_transaction(&transaction_id).await;
    println!("PerformTransaction status: {}", performed.status);

    let state = api.check_transaction(&transaction_id).await;
    match state.into_result() {
        Ok(result) => println!("Transaction state: {}", result["state"]),
        Err(e) => println!("CheckTransaction failed: {}", e),
    }

    Ok(())
}
