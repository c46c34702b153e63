use sb_core::Card;

use serde::Serialize;

/// Card DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct CardDto {
    pub id: String,
    pub text: String,
    pub description: String,
}

impl From<Card> for CardDto {
    fn from(c: Card) -> Self {
        Self {
            id: c.id.to_string(),
            text: c.text,
            description: c.description,
        }
    }
}
