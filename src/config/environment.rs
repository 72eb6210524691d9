use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "main.log";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// The three secrets the bot cannot start without.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

/// Environment configuration
/// Validates environment variables once at startup; `.env` is loaded by `main`
#[derive(Debug, Clone)]
pub struct Config {
    credentials: Credentials,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_time: Duration,
    pub from_date: Option<i64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let practicum_token = non_empty_var("PRACTICUM_TOKEN");
        let telegram_token = non_empty_var("TELEGRAM_TOKEN");
        let telegram_chat_id = non_empty_var("TELEGRAM_CHAT_ID");

        let presence = [
            ("PRACTICUM_TOKEN", practicum_token.is_some()),
            ("TELEGRAM_TOKEN", telegram_token.is_some()),
            ("TELEGRAM_CHAT_ID", telegram_chat_id.is_some()),
        ];
        for (name, _) in presence.iter().filter(|(_, present)| !present) {
            tracing::error!("{} is missing", name);
        }

        let credentials = match (practicum_token, telegram_token, telegram_chat_id) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) => Credentials {
                practicum_token,
                telegram_token,
                telegram_chat_id,
            },
            _ => {
                let (name, _) = presence
                    .iter()
                    .find(|(_, present)| !present)
                    .copied()
                    .unwrap_or(("PRACTICUM_TOKEN", false));
                return Err(ConfigError::MissingVar(name));
            }
        };

        let endpoint = non_empty_var("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let telegram_api_url = non_empty_var("TELEGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        let retry_time = match non_empty_var("RETRY_TIME") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Invalid { name: "RETRY_TIME", value: raw }),
            },
            None => Duration::from_secs(DEFAULT_RETRY_TIME_SECS),
        };

        let from_date = match non_empty_var("POLL_FROM_DATE") {
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| ConfigError::Invalid { name: "POLL_FROM_DATE", value: raw })?,
            ),
            None => None,
        };

        Ok(Self {
            credentials,
            endpoint,
            telegram_api_url,
            retry_time,
            from_date,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Log destination is resolved before the rest of the config so that
/// credential errors already land in the log file.
pub fn log_file_from_env() -> PathBuf {
    non_empty_var("LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
