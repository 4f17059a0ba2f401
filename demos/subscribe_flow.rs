//! Subscribe API walkthrough
//!
//! Tokenizes a test card, verifies it with the SMS code, then pays a
//! receipt with the token. Enable observability to see the calls as spans
//! and metrics in an OTLP collector.
//!
//! Run with: PAYCOM_ID=... PAYCOM_KEY=... cargo run --example subscribe_flow

use paycom::SubscribeApi;
use paycom_core::ObservabilityConfig;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let id = std::env::var("PAYCOM_ID").unwrap_or_default();
    let key = std::env::var("PAYCOM_KEY").ok();

    let config = ObservabilityConfig::new("paycom-subscribe-demo")
        .with_endpoint("http://localhost:4317")
        .with_log_level("debug");

    // Cards are tokenized with the front-end credentials (no key)
    let front = SubscribeApi::builder(Some(id.as_str()), None)
        .test_mode(true)
        .with_observability(config)
        .build()?;
    let back = SubscribeApi::builder(Some(id.as_str()), key.as_deref())
        .test_mode(true)
        .with_metrics()
        .build()?;

    let card = front
        .create_card("8600069195406311", "0399", true, None, None)
        .await;
    let Some(token) = card
        .result()
        .and_then(|r| r["card"]["token"].as_str())
        .map(str::to_string)
    else {
        println!("cards.create failed: {:?}", card.error_text("en"));
        return Ok(());
    };

    front.get_verify_code(&token).await;
    let verified = front.verify_card(&token, "666666").await;
    println!("cards.verify: {}", verified.status);

    let receipt = back
        .create_receipt(500000, json!({"order_id": 42}), Some("Demo order"), None)
        .await;
    let receipt_id = receipt
        .result()
        .and_then(|r| r["receipt"]["_id"].as_str())
        .unwrap_or_default()
        .to_string();

    let paid = back.pay_receipt(&receipt_id, &token, None).await;
    println!("receipts.pay: {}", serde_json::to_string_pretty(&paid)?);

    back.remove_card(&token).await;
    paycom_core::shutdown_observability();

    Ok(())
}
