use crate::Result;

use async_trait::async_trait;
use sb_core::User;

/// Persistence contract for user records, keyed by opaque id.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>>;

    /// Inserts the user, or replaces the record with the same id.
    async fn upsert_user(&self, user: &User) -> Result<()>;
}
