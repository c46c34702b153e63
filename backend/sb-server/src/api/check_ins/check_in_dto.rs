use sb_core::CheckIn;

use serde::Serialize;

/// Check-in DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInDto {
    pub user_id: String,
    /// Display name at check-in time
    pub display_name: String,
    pub timestamp: String,
}

impl From<CheckIn> for CheckInDto {
    fn from(c: CheckIn) -> Self {
        Self {
            user_id: c.user_id,
            display_name: c.display_name,
            timestamp: c.timestamp.to_rfc3339(),
        }
    }
}
