use crate::document::StoreDocument;
use crate::{BoardStore, LedgerStore, Result, TaskStore, UserStore};

use async_trait::async_trait;
use sb_core::{Board, CheckIn, Task, User};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Volatile backend. Everything is gone on restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<StoreDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.inner.read().await.find_user(user_id))
    }

    async fn upsert_user(&self, user: &User) -> Result<()> {
        self.inner.write().await.upsert_user(user);
        Ok(())
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn append_check_in(&self, check_in: &CheckIn) -> Result<()> {
        self.inner.write().await.append_check_in(check_in);
        Ok(())
    }

    async fn check_ins_for_user(&self, user_id: &str) -> Result<Vec<CheckIn>> {
        Ok(self.inner.read().await.check_ins_for_user(user_id))
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn tasks_for_user(&self, user_id: &str) -> Result<Vec<Task>> {
        Ok(self.inner.read().await.tasks_for_user(user_id))
    }

    async fn insert_task(&self, task: &Task) -> Result<()> {
        self.inner.write().await.insert_task(task);
        Ok(())
    }

    async fn remove_task(&self, user_id: &str, task_id: Uuid) -> Result<bool> {
        Ok(self.inner.write().await.remove_task(user_id, task_id))
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn load_board(&self) -> Result<Option<Board>> {
        Ok(self.inner.read().await.board.clone())
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.inner.write().await.board = Some(board.clone());
        Ok(())
    }
}
