use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::BotError;

pub const ENDPOINT_ACCESS_ERROR: &str = "Endpoint access error";

/// Source of homework status updates.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch everything updated since `since` (Unix seconds), or since now when `None`.
    async fn fetch_updates(&self, since: Option<i64>) -> Result<Value, BotError>;
}

/// Practicum homework-status API client
/// One GET per call, no internal retry
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            token,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch_updates(&self, since: Option<i64>) -> Result<Value, BotError> {
        let from_date = since.unwrap_or_else(|| chrono::Utc::now().timestamp());

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Homework API transport error: {}", e.without_url());
                BotError::ApiAccess(ENDPOINT_ACCESS_ERROR.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::ApiAccess(format!(
                "Endpoint {} is unavailable, http status: {}",
                self.endpoint,
                status.as_u16()
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::debug!("Homework API returned undecodable body: {}", e.without_url());
            BotError::ApiAccess("Failed to decode response body".to_string())
        })
    }
}
