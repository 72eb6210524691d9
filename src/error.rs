/// Failure classes the poll loop knows how to route.
///
/// `ApiAccess` is reported to the chat and retried on the next cycle,
/// `MissingField` stops the loop, `Delivery` is logged and dropped.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("{0}")]
    ApiAccess(String),
    #[error("missing field \"{0}\"")]
    MissingField(String),
    #[error("failed to deliver message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ApiAccess,
    MissingField,
    Delivery,
}

impl BotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ApiAccess(_) => ErrorKind::ApiAccess,
            Self::MissingField(_) => ErrorKind::MissingField,
            Self::Delivery(_) => ErrorKind::Delivery,
        }
    }
}
