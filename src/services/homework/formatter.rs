use crate::error::BotError;
use crate::services::homework::{HomeworkRecord, HomeworkStatus, NAME_FIELD};

/// Build the chat text for a record whose review status changed.
pub fn format_status_message(record: &HomeworkRecord) -> Result<String, BotError> {
    let name = record
        .name()
        .ok_or_else(|| BotError::MissingField(NAME_FIELD.to_string()))?;

    let keyword = record.status();
    let status = keyword
        .as_deref()
        .and_then(HomeworkStatus::parse)
        .ok_or_else(|| {
            BotError::ApiAccess(format!(
                "API returned unknown status {} for \"{}\"",
                keyword.as_deref().unwrap_or("null"),
                name
            ))
        })?;

    Ok(format!(
        "Changed review status for \"{}\". {}",
        name,
        status.verdict()
    ))
}

/// Text sent to the chat when a cycle fails with a reportable error.
pub fn format_failure_message(error: &BotError) -> String {
    format!("Program failure: {}", error)
}
