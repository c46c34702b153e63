use crate::CardDto;

use sb_core::Column;

use serde::Serialize;

/// Column DTO for JSON serialization; card order is the stored order
#[derive(Debug, Serialize)]
pub struct ColumnDto {
    pub id: String,
    pub title: String,
    pub cards: Vec<CardDto>,
}

impl From<Column> for ColumnDto {
    fn from(c: Column) -> Self {
        Self {
            id: c.id.to_string(),
            title: c.title,
            cards: c.cards.into_iter().map(CardDto::from).collect(),
        }
    }
}
