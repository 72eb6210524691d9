use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::BotError;

/// Anything that can post a text message to a chat.
#[async_trait]
pub trait ChatSender: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError>;
}

/// Telegram Bot API client
pub struct TelegramClient {
    client: Client,
    token: String,
    base_url: String,
}

/// Envelope every Bot API reply is wrapped in
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ChatSender for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        // The token is part of the path, so errors are stripped of their URL.
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| BotError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        let body: Option<TelegramResponse> = response.json().await.ok();

        match body {
            Some(reply) if status.is_success() && reply.ok => Ok(()),
            Some(TelegramResponse { description: Some(description), .. }) => Err(BotError::Delivery(
                format!("Telegram API returned status {}: {}", status.as_u16(), description),
            )),
            None if status.is_success() => Ok(()),
            _ => Err(BotError::Delivery(format!(
                "Telegram API returned status {}",
                status.as_u16()
            ))),
        }
    }
}
