use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One signed-in presence: an opaque bearer token bound to a user id.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Uuid,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
