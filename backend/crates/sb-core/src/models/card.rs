use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,

    pub text: String,
    pub description: String,
}

impl Card {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            description: String::new(),
        }
    }
}
