use serde_json::Value;

use crate::error::BotError;
use crate::services::homework::HomeworkRecord;

pub const HOMEWORKS_KEY: &str = "homeworks";

/// Pull the `homeworks` list out of an API response, order preserved.
pub fn extract_homeworks(response: &Value) -> Result<Vec<HomeworkRecord>, BotError> {
    let homeworks = response
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| BotError::MissingField(HOMEWORKS_KEY.to_string()))?;

    match homeworks {
        Value::Array(items) => Ok(items.iter().cloned().map(HomeworkRecord::new).collect()),
        other => Err(BotError::ApiAccess(format!(
            "Value \"{}\" is of type \"{}\", not \"list\"",
            HOMEWORKS_KEY,
            json_type_name(other)
        ))),
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
