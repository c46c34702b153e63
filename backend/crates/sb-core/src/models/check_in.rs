use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One attendance record. Append-only; never edited after the fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub user_id: String,

    /// Display name at check-in time; later profile changes do not rewrite history.
    pub display_name: String,

    pub timestamp: DateTime<Utc>,
}

impl CheckIn {
    pub fn new(user_id: String, display_name: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id,
            display_name,
            timestamp,
        }
    }
}
