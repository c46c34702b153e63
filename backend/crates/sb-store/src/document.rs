use sb_core::{Board, CheckIn, Task, User};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything the service persists, as one document.
///
/// Both backends manage the same shape: the memory store keeps it behind a
/// lock, the file store additionally writes it out as JSON after every
/// mutation. Insertion order of `tasks` and `check_ins` is meaningful.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    pub users: Vec<User>,
    pub check_ins: Vec<CheckIn>,
    pub tasks: Vec<Task>,
    pub board: Option<Board>,
}

impl StoreDocument {
    pub fn find_user(&self, user_id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == user_id).cloned()
    }

    pub fn upsert_user(&mut self, user: &User) {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => self.users.push(user.clone()),
        }
    }

    pub fn append_check_in(&mut self, check_in: &CheckIn) {
        self.check_ins.push(check_in.clone());
    }

    pub fn check_ins_for_user(&self, user_id: &str) -> Vec<CheckIn> {
        self.check_ins
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn tasks_for_user(&self, user_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn insert_task(&mut self, task: &Task) {
        self.tasks.push(task.clone());
    }

    /// Removes the task only when both id and owner match. A miss on either
    /// is indistinguishable from the other by design.
    pub fn remove_task(&mut self, user_id: &str, task_id: Uuid) -> bool {
        match self
            .tasks
            .iter()
            .position(|t| t.id == task_id && t.user_id == user_id)
        {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }
}
