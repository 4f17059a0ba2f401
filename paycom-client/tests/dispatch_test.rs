//! Response normalization over real HTTP round trips

mod common;

use common::{mock_result, MockHttpServer, MockReply};
use paycom_client::{Auth, Dispatcher, MerchantApi, SubscribeApi};
use paycom_core::{HttpMethod, ResponseBody};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_get_sends_query_string() {
    let mut server = MockHttpServer::new(mock_result(json!({"receipt": {}}))).await;
    let api = SubscribeApi::builder(Some("id"), Some("key"))
        .base_url(server.url())
        .build()
        .unwrap();

    let response = api
        .dispatcher()
        .send(
            "receipts.get",
            json!({"id": "r1", "account": {"order id": 7, "tags": ["a", "b"]}}),
            HttpMethod::Get,
        )
        .await;

    assert!(response.status);
    assert_eq!(response.http_method, HttpMethod::Get);

    let request = server.next_request().await;
    assert_eq!(request.method, "GET");
    assert_eq!(
        request.path,
        "/api?id=r1&account[order+id]=7&account[tags][0]=a&account[tags][1]=b"
    );
    assert!(request.body.is_empty());
    assert_eq!(request.header("x-auth"), Some("id:key"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_other_verbs_send_envelope() {
    let mut server = MockHttpServer::new(mock_result(json!(true))).await;
    let dispatcher = Dispatcher::new(reqwest::Client::new(), server.url(), Auth::None, None);

    for verb in [HttpMethod::Put, HttpMethod::Patch, HttpMethod::Delete] {
        let response = dispatcher.send("cards.remove", json!({"token": "t"}), verb).await;
        assert!(response.status);

        let request = server.next_request().await;
        assert_eq!(request.method, verb.as_str());
        assert_eq!(request.json()["params"], json!({"token": "t"}));
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockHttpServer::new(MockReply::status(500, "<h1>oops</h1>")).await;
    let api = MerchantApi::builder("Paycom", "key")
        .base_url(server.url())
        .build()
        .unwrap();

    let response = api.check_transaction("t").await;

    assert!(!response.status);
    assert_eq!(response.http_error, Some(true));
    assert_eq!(response.http_status_code, Some(500));
    assert_eq!(response.error_code.as_deref(), Some("500"));
    assert_eq!(
        response.http_error_message.as_deref(),
        Some("HTTP/1.1 500 Internal Server Error")
    );
    assert_eq!(response.error_message, response.http_error_message);
    assert_eq!(response.body, ResponseBody::Raw(b"<h1>oops</h1>".to_vec()));
    assert!(response.error.is_none());

    server.shutdown().await;
}

#[tokio::test]
async fn test_http_error_keeps_json_body() {
    let server = MockHttpServer::new(MockReply::status(
        401,
        r#"{"error":{"code":-32504,"message":"Insufficient privileges"}}"#,
    ))
    .await;
    let api = MerchantApi::builder("Paycom", "wrong")
        .base_url(server.url())
        .build()
        .unwrap();

    let response = api.get_statement(0, 1).await;

    assert_eq!(response.http_error, Some(true));
    assert_eq!(response.http_status_code, Some(401));
    assert_eq!(response.body.get("error").unwrap()["code"], -32504);

    server.shutdown().await;
}

#[tokio::test]
async fn test_connect_failure() {
    let api = MerchantApi::builder("Paycom", "key")
        .base_url("http://127.0.0.1:1/api")
        .build()
        .unwrap();

    let response = api.check_transaction("t").await;

    assert!(!response.status);
    assert_eq!(response.http_error, Some(false));
    assert_eq!(response.http_status_code, Some(0));
    assert_eq!(response.error_code.as_deref(), Some("connect"));
    assert!(!response.error_message.unwrap_or_default().is_empty());
    assert_eq!(response.body, ResponseBody::Empty);
}

#[tokio::test]
async fn test_timeout() {
    let server = MockHttpServer::new(
        mock_result(json!({})).delayed(Duration::from_secs(2)),
    )
    .await;
    let api = MerchantApi::builder("Paycom", "key")
        .base_url(server.url())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let response = api.check_transaction("t").await;

    assert!(!response.status);
    assert_eq!(response.http_error, Some(false));
    assert_eq!(response.http_status_code, Some(0));
    assert_eq!(response.error_code.as_deref(), Some("timeout"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_false_error_member_is_success() {
    let server = MockHttpServer::new(MockReply::ok(json!({"result": {"state": 2}, "error": false}))).await;
    let api = MerchantApi::builder("Paycom", "key")
        .base_url(server.url())
        .build()
        .unwrap();

    let response = api.check_transaction("t").await;

    assert!(response.status);
    assert_eq!(response.into_result().unwrap(), json!({"state": 2}));

    server.shutdown().await;
}

#[tokio::test]
async fn test_serialized_response_shape() {
    let server = MockHttpServer::new(mock_result(json!({"success": true}))).await;
    let api = SubscribeApi::builder(Some("id"), None)
        .base_url(server.url())
        .with_metrics()
        .build()
        .unwrap();

    let response = api.remove_card("tok").await;
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["status"], true);
    assert_eq!(value["method"], "cards.remove");
    assert_eq!(value["params"], json!({"token": "tok"}));
    assert_eq!(value["httpMethod"], "POST");
    assert_eq!(value["body"]["result"]["success"], true);
    assert!(value.get("httpError").is_none());
    assert!(value.get("errorCode").is_none());

    server.shutdown().await;
}
