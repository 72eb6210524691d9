pub mod config;
pub mod error;
pub mod services;

use std::sync::Arc;

use config::Config;
use services::homework::PracticumClient;
use services::monitor::MonitorEngine;
use services::telegram::{Notifier, TelegramClient};

/// Wire the production clients into a poll loop.
pub fn create_monitor(config: &Config) -> MonitorEngine {
    let credentials = config.credentials();

    let source = Arc::new(PracticumClient::new(
        config.endpoint.clone(),
        credentials.practicum_token.clone(),
    ));
    let sender = Arc::new(TelegramClient::new(
        config.telegram_api_url.clone(),
        credentials.telegram_token.clone(),
    ));
    let notifier = Notifier::new(sender, credentials.telegram_chat_id.clone());

    let engine = MonitorEngine::new(source, notifier, config.retry_time);
    match config.from_date {
        Some(from_date) => engine.with_cursor(from_date),
        None => engine,
    }
}
