use crate::ColumnDto;

use sb_core::Board;

use serde::Serialize;

/// Board DTO for JSON serialization; column order is the stored order
#[derive(Debug, Serialize)]
pub struct BoardDto {
    pub id: String,
    pub title: String,
    pub columns: Vec<ColumnDto>,
}

impl From<Board> for BoardDto {
    fn from(b: Board) -> Self {
        Self {
            id: b.id.to_string(),
            title: b.title,
            columns: b.columns.into_iter().map(ColumnDto::from).collect(),
        }
    }
}
