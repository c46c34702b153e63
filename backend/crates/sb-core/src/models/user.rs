use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable opaque id: the verified token subject, or "anon-<uuid>".
    pub id: String,

    pub display_name: String,
    pub email: Option<String>,
    pub picture_url: Option<String>,

    pub is_anonymous: bool,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: String,
        display_name: String,
        email: Option<String>,
        picture_url: Option<String>,
    ) -> Self {
        Self {
            id,
            display_name,
            email,
            picture_url,
            is_anonymous: false,
            created_at: Utc::now(),
        }
    }

    pub fn new_anonymous(display_name: String) -> Self {
        Self {
            id: format!("anon-{}", Uuid::new_v4()),
            display_name,
            email: None,
            picture_url: None,
            is_anonymous: true,
            created_at: Utc::now(),
        }
    }
}
