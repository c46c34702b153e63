use crate::models::card::Card;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: Uuid,

    pub title: String,
    /// Position in this vec is the card's rank within the column.
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            cards: Vec::new(),
        }
    }
}
