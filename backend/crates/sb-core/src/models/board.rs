use crate::models::column::Column;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single shared board. Column order is meaningful and preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub title: String,
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            columns: Vec::new(),
        }
    }

    /// Starter board used when the backing store holds no board yet.
    pub fn seeded() -> Self {
        let mut board = Self::new("Team Board".to_string());
        board.columns = vec![
            Column::new("To Do".to_string()),
            Column::new("In Progress".to_string()),
            Column::new("Done".to_string()),
        ];
        board
    }

    pub fn column(&self, column_id: Uuid) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: Uuid) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }
}
