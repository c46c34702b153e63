mod identity;
mod ledger;

use std::sync::Arc;

use sb_core::User;
use sb_store::MemoryStore;

pub(crate) fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub(crate) fn test_user(id: &str) -> User {
    User::new(id.to_string(), format!("User {}", id), None, None)
}
