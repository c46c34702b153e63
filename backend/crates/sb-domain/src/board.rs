use crate::Result;
use crate::error::DomainError;
use crate::validate::require_text;

use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use sb_core::{Board, Card};
use sb_store::BoardStore;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Partial card update; `None` means "leave the field alone".
#[derive(Debug, Default)]
pub struct CardPatch {
    pub text: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardLocation {
    column: usize,
    position: usize,
}

struct BoardState {
    board: Board,
    /// Card id to its current (column, position). Kept in lockstep with
    /// `board` so lookups never walk every column.
    index: HashMap<Uuid, CardLocation>,
}

/// Owner of the single shared board.
///
/// All mutations take the write lock, apply to a working copy, persist that
/// copy, and publish it only after the store accepted it. A failed save
/// therefore leaves callers reading the board exactly as it was; a card can
/// never be duplicated across columns or vanish from all of them.
pub struct BoardService {
    store: Arc<dyn BoardStore>,
    state: RwLock<BoardState>,
}

impl BoardService {
    /// Load the saved board, or seed and persist a starter one.
    ///
    /// Runs once at startup, before the service starts answering requests,
    /// so there is no window where two callers could race to seed.
    pub async fn open(store: Arc<dyn BoardStore>) -> Result<Self> {
        let board = match store.load_board().await? {
            Some(board) => board,
            None => {
                let board = Board::seeded();
                store.save_board(&board).await?;
                info!("Seeded starter board \"{}\"", board.title);
                board
            }
        };

        let index = Self::build_index(&board);
        Ok(Self {
            store,
            state: RwLock::new(BoardState { board, index }),
        })
    }

    /// Snapshot of the whole board.
    pub async fn board(&self) -> Board {
        self.state.read().await.board.clone()
    }

    pub async fn card(&self, card_id: Uuid) -> Result<Card> {
        let state = self.state.read().await;
        let location = state
            .index
            .get(&card_id)
            .ok_or_else(|| DomainError::not_found("Card"))?;
        Ok(state.board.columns[location.column].cards[location.position].clone())
    }

    /// Append a card to `column_id` with empty description.
    pub async fn add_card(&self, column_id: Uuid, text: &str) -> Result<Card> {
        let text = require_text(text, "text")?;

        let mut state = self.state.write().await;
        let column = state
            .board
            .columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| DomainError::not_found("Column"))?;

        let card = Card::new(text);
        let mut board = state.board.clone();
        board.columns[column].cards.push(card.clone());

        self.store.save_board(&board).await?;
        let position = board.columns[column].cards.len() - 1;
        state.board = board;
        state.index.insert(card.id, CardLocation { column, position });

        info!("Card {} added to column {}", card.id, column_id);
        Ok(card)
    }

    /// Apply a partial update to the card's own fields. Placement is the
    /// business of [`move_card`](Self::move_card).
    pub async fn update_card(&self, card_id: Uuid, patch: CardPatch) -> Result<Card> {
        let mut state = self.state.write().await;
        let location = *state
            .index
            .get(&card_id)
            .ok_or_else(|| DomainError::not_found("Card"))?;

        let mut board = state.board.clone();
        let card = &mut board.columns[location.column].cards[location.position];
        if let Some(text) = patch.text {
            card.text = text;
        }
        if let Some(description) = patch.description {
            card.description = description;
        }
        let updated = card.clone();

        self.store.save_board(&board).await?;
        state.board = board;
        Ok(updated)
    }

    pub async fn delete_card(&self, card_id: Uuid) -> Result<()> {
        let mut state = self.state.write().await;
        let location = *state
            .index
            .get(&card_id)
            .ok_or_else(|| DomainError::not_found("Card"))?;

        let mut board = state.board.clone();
        board.columns[location.column].cards.remove(location.position);

        self.store.save_board(&board).await?;
        state.board = board;
        state.index = Self::build_index(&state.board);

        info!("Card {} deleted", card_id);
        Ok(())
    }

    /// Move a card to `dest_column_id` at `dest_index`.
    ///
    /// The card is removed first, and the index is clamped to `[0, len]` of
    /// the destination as it looks after that removal, which is what makes
    /// same-column reordering come out right.
    pub async fn move_card(
        &self,
        card_id: Uuid,
        dest_column_id: Uuid,
        dest_index: usize,
    ) -> Result<Board> {
        let mut state = self.state.write().await;
        let location = *state
            .index
            .get(&card_id)
            .ok_or_else(|| DomainError::not_found("Card"))?;

        let mut board = state.board.clone();
        let dest_column = board
            .columns
            .iter()
            .position(|c| c.id == dest_column_id)
            .ok_or_else(|| DomainError::not_found("Column"))?;

        let card = board.columns[location.column].cards.remove(location.position);
        let insert_at = dest_index.min(board.columns[dest_column].cards.len());
        board.columns[dest_column].cards.insert(insert_at, card);

        self.store.save_board(&board).await?;
        state.board = board;
        state.index = Self::build_index(&state.board);

        info!(
            "Card {} moved to column {} position {}",
            card_id, dest_column_id, insert_at
        );
        Ok(state.board.clone())
    }

    fn build_index(board: &Board) -> HashMap<Uuid, CardLocation> {
        let mut index = HashMap::new();
        for (column, col) in board.columns.iter().enumerate() {
            for (position, card) in col.cards.iter().enumerate() {
                index.insert(card.id, CardLocation { column, position });
            }
        }
        index
    }
}
