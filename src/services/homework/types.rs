use serde_json::Value;

pub const NAME_FIELD: &str = "homework_name";
pub const STATUS_FIELD: &str = "status";
pub const UPDATED_FIELD: &str = "date_updated";

/// One entry of the `homeworks` array, kept as raw JSON.
///
/// Fields are read lazily so a malformed record only fails at the point
/// where the missing piece is actually needed.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkRecord(Value);

impl HomeworkRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn name(&self) -> Option<String> {
        self.text(NAME_FIELD)
    }

    pub fn status(&self) -> Option<String> {
        self.text(STATUS_FIELD)
    }

    /// Change marker used to suppress repeated notifications.
    pub fn date_updated(&self) -> Option<String> {
        self.text(UPDATED_FIELD)
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
