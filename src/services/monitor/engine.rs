use std::sync::Arc;
use std::time::Duration;

use crate::error::{BotError, ErrorKind};
use crate::services::homework::{
    extract_homeworks, format_failure_message, format_status_message, HomeworkSource,
};
use crate::services::telegram::Notifier;

/// Result of a single fetch/validate/notify pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The cursor advanced; `dispatched` records were sent to the notifier.
    Completed { records: usize, dispatched: usize },
    /// An API failure was reported to the chat; the cursor stayed put.
    Reported,
}

/// Sequential poll loop: fetch → validate → notify on change → sleep.
///
/// Owns the fetch cursor and the last-seen `date_updated` marker.
/// A record is dispatched only when its marker differs from the previous
/// one; a missing `date_updated` is a marker value of its own.
pub struct MonitorEngine {
    source: Arc<dyn HomeworkSource>,
    notifier: Notifier,
    retry_time: Duration,
    cursor: Option<i64>,
    /// `None` until the first record is taken; the inner value is the
    /// record's `date_updated`, which may itself be absent.
    last_seen: Option<Option<String>>,
}

impl MonitorEngine {
    pub fn new(source: Arc<dyn HomeworkSource>, notifier: Notifier, retry_time: Duration) -> Self {
        Self {
            source,
            notifier,
            retry_time,
            cursor: Some(chrono::Utc::now().timestamp()),
            last_seen: None,
        }
    }

    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_ref().and_then(|marker| marker.as_deref())
    }

    pub fn retry_time(&self) -> Duration {
        self.retry_time
    }

    /// Poll forever. Returns only with a non-recoverable error, and only
    /// after the retry pause for that cycle has elapsed.
    pub async fn run(&mut self) -> Result<(), BotError> {
        tracing::info!(
            "Homework monitor started, polling every {}s",
            self.retry_time.as_secs()
        );

        loop {
            let outcome = self.run_cycle().await;

            // Runs on every path before the outcome is acted on.
            tokio::time::sleep(self.retry_time).await;

            if let Err(e) = outcome {
                tracing::error!("Homework monitor stopped: {}", e);
                return Err(e);
            }
        }
    }

    /// One pass without the trailing sleep.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, BotError> {
        match self.poll().await {
            Ok(outcome) => Ok(outcome),
            Err(e) => match e.kind() {
                ErrorKind::ApiAccess => {
                    tracing::error!("Program failure: {}", e);
                    self.deliver(&format_failure_message(&e)).await;
                    Ok(CycleOutcome::Reported)
                }
                ErrorKind::MissingField | ErrorKind::Delivery => Err(e),
            },
        }
    }

    async fn poll(&mut self) -> Result<CycleOutcome, BotError> {
        tracing::debug!("Fetching homework updates, from_date={:?}", self.cursor);

        let response = self.source.fetch_updates(self.cursor).await?;
        let records = extract_homeworks(&response)?;

        let mut dispatched = 0;
        for record in &records {
            let marker = record.date_updated();
            if self.last_seen.as_ref() == Some(&marker) {
                tracing::debug!("Skipping unchanged homework, date_updated={:?}", marker);
                continue;
            }

            // Taken before formatting so a bad record is reported only once.
            self.last_seen = Some(marker);
            let message = format_status_message(record)?;
            self.deliver(&message).await;
            dispatched += 1;
        }

        self.cursor = Some(chrono::Utc::now().timestamp());

        Ok(CycleOutcome::Completed {
            records: records.len(),
            dispatched,
        })
    }

    /// Delivery is best-effort; the notifier already logged the failure.
    async fn deliver(&self, message: &str) {
        if let Err(e) = self.notifier.notify(message).await {
            tracing::debug!("Dropping undelivered notification: {}", e);
        }
    }
}
