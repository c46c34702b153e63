use crate::Result;

use async_trait::async_trait;
use sb_core::CheckIn;

/// Persistence contract for the append-only attendance ledger.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn append_check_in(&self, check_in: &CheckIn) -> Result<()>;

    /// All of the user's check-ins in insertion order.
    async fn check_ins_for_user(&self, user_id: &str) -> Result<Vec<CheckIn>>;
}
