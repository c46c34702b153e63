use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub user_id: String,

    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(user_id: String, title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            completed: false,
        }
    }
}
