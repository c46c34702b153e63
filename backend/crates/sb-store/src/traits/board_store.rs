use crate::Result;

use async_trait::async_trait;
use sb_core::Board;

/// Persistence contract for the single shared board document.
#[async_trait]
pub trait BoardStore: Send + Sync {
    async fn load_board(&self) -> Result<Option<Board>>;

    /// Replaces the stored board wholesale.
    async fn save_board(&self, board: &Board) -> Result<()>;
}
