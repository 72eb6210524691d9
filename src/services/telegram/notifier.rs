use std::sync::Arc;

use crate::error::{BotError, ErrorKind};
use crate::services::telegram::ChatSender;

/// Delivers notification text to the single configured chat.
pub struct Notifier {
    sender: Arc<dyn ChatSender>,
    chat_id: String,
}

impl Notifier {
    pub fn new(sender: Arc<dyn ChatSender>, chat_id: String) -> Self {
        Self { sender, chat_id }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Any sender failure comes back as [`BotError::Delivery`].
    pub async fn notify(&self, message: &str) -> Result<(), BotError> {
        match self.sender.send_message(&self.chat_id, message).await {
            Ok(()) => {
                tracing::info!("Message sent to chat {}: {}", self.chat_id, message);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Telegram API error: {}", e);
                Err(match e.kind() {
                    ErrorKind::Delivery => e,
                    _ => BotError::Delivery(e.to_string()),
                })
            }
        }
    }
}
