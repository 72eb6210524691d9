use homework_notifier::error::ErrorKind;
use homework_notifier::services::telegram::{ChatSender, TelegramClient};
use serde_json::Value;

use crate::common::{closed_port_url, spawn_stub};

// =============================================================================
// INTEGRATION TESTS - TELEGRAM CLIENT
// =============================================================================

const TOKEN: &str = "123456:secret-bot-token";

#[tokio::test]
async fn test_send_message_posts_chat_and_text() {
    let stub = spawn_stub(200, r#"{"ok": true, "result": {"message_id": 7}}"#).await;
    let client = TelegramClient::new(format!("{}/", stub.url), TOKEN.to_string());

    client.send_message("4242", "Changed review status").await.unwrap();

    let requests = stub.state.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, format!("/bot{}/sendMessage", TOKEN));

    let payload: Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(payload["chat_id"], "4242");
    assert_eq!(payload["text"], "Changed review status");
}

#[tokio::test]
async fn test_api_rejection_is_delivery_error() {
    let stub = spawn_stub(400, r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#).await;
    let client = TelegramClient::new(stub.url.clone(), TOKEN.to_string());

    let err = client.send_message("4242", "hello").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Delivery);
    assert!(err.to_string().contains("400"));
    assert!(err.to_string().contains("chat not found"));
}

#[tokio::test]
async fn test_not_ok_reply_is_delivery_error() {
    let stub = spawn_stub(200, r#"{"ok": false}"#).await;
    let client = TelegramClient::new(stub.url.clone(), TOKEN.to_string());

    let err = client.send_message("4242", "hello").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Delivery);
}

#[tokio::test]
async fn test_transport_error_does_not_leak_token() {
    let base = closed_port_url().replace("/api/user_api/homework_statuses/", "");
    let client = TelegramClient::new(base, TOKEN.to_string());

    let err = client.send_message("4242", "hello").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Delivery);
    assert!(!err.to_string().contains("secret-bot-token"));
}
