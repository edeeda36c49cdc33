//! Input validation functions
//!
//! Schema checks are declared with the `validator` derive on the request
//! types; this module holds the helpers that sit around them.

use uuid::Uuid;
use validator::ValidationErrors;

/// Parse a path parameter that must be a UUID
pub fn parse_uuid(value: &str, field: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("{} must be a valid UUID", field))
}

/// Normalize a caller-supplied owner identifier
///
/// Returns `None` for blank identifiers so that they never match a stored
/// owner.
pub fn normalize_owner_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Flatten `validator` errors into one message
///
/// Fields are sorted so the message is stable across runs.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, err.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
