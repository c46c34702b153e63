use crate::Result;
use crate::error::DomainError;

use std::panic::Location;

use error_location::ErrorLocation;

pub fn sanitize_string(s: &str) -> String {
    s.trim().to_string()
}

/// Sanitized value of a required text field. Whitespace-only input is as
/// empty as the empty string.
#[track_caller]
pub fn require_text(value: &str, field: &'static str) -> Result<String> {
    let sanitized = sanitize_string(value);
    if sanitized.is_empty() {
        return Err(DomainError::Validation {
            message: format!("{} must not be empty", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(sanitized)
}
