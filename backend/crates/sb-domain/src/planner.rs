use crate::Result;
use crate::error::DomainError;
use crate::validate::require_text;

use std::sync::Arc;

use log::info;
use sb_core::Task;
use sb_store::TaskStore;
use uuid::Uuid;

/// Per-user task list. Owners see and delete only their own tasks.
pub struct TaskPlanner {
    store: Arc<dyn TaskStore>,
}

impl TaskPlanner {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        self.store.tasks_for_user(user_id).await.map_err(Into::into)
    }

    pub async fn add_task(&self, user_id: &str, title: &str) -> Result<Task> {
        let title = require_text(title, "title")?;

        let task = Task::new(user_id.to_string(), title);
        self.store.insert_task(&task).await?;

        info!("Task {} added for {}", task.id, user_id);
        Ok(task)
    }

    /// Whether the task is missing or owned by someone else is deliberately
    /// not revealed.
    pub async fn delete_task(&self, user_id: &str, task_id: Uuid) -> Result<()> {
        if self.store.remove_task(user_id, task_id).await? {
            info!("Task {} deleted for {}", task_id, user_id);
            Ok(())
        } else {
            Err(DomainError::not_found("Task"))
        }
    }
}
