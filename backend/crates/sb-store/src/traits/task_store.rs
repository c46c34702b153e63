use crate::Result;

use async_trait::async_trait;
use sb_core::Task;
use uuid::Uuid;

/// Persistence contract for per-user tasks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// The owner's tasks in insertion order.
    async fn tasks_for_user(&self, user_id: &str) -> Result<Vec<Task>>;

    async fn insert_task(&self, task: &Task) -> Result<()>;

    /// Returns false when no task with that id belongs to `user_id`.
    async fn remove_task(&self, user_id: &str, task_id: Uuid) -> Result<bool>;
}
