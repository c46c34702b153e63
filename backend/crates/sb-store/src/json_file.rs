use crate::document::StoreDocument;
use crate::{BoardStore, LedgerStore, Result, StoreError, TaskStore, UserStore};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{info, warn};
use sb_core::{Board, CheckIn, Task, User};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Durable backend: the whole [`StoreDocument`] as one pretty-printed JSON
/// file, rewritten atomically on every mutation.
///
/// Write protocol:
/// 1. Serialize to a temp file next to the target (pid-suffixed)
/// 2. Flush with explicit fsync
/// 3. Atomic rename to the final location
///
/// A crash mid-write therefore never leaves a truncated document behind.
/// Mutations clone the cached document, persist the clone, and only then
/// publish it, so a failed write leaves the served state untouched.
pub struct JsonFileStore {
    path: PathBuf,
    inner: RwLock<StoreDocument>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating an empty document when the file
    /// does not exist yet. A file that no longer parses is moved aside and
    /// replaced rather than taking the service down.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::dir_creation(parent.to_path_buf(), e))?;
            }
        }

        let document = match tokio::fs::try_exists(&path).await {
            Ok(true) => Self::load_document(&path).await?,
            Ok(false) => StoreDocument::default(),
            Err(e) => return Err(StoreError::file_read(path.clone(), e)),
        };

        let store = Self {
            path,
            inner: RwLock::new(document),
        };

        // Round-trips the document immediately so an unwritable path fails
        // at startup instead of on the first check-in.
        let snapshot = store.inner.read().await.clone();
        store.persist(&snapshot).await?;

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_document(path: &Path) -> Result<StoreDocument> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::file_read(path.to_path_buf(), e))?;

        match serde_json::from_str::<StoreDocument>(&contents) {
            Ok(document) => {
                info!(
                    "Loaded store document from {} ({} users, {} check-ins, {} tasks)",
                    path.display(),
                    document.users.len(),
                    document.check_ins.len(),
                    document.tasks.len()
                );
                Ok(document)
            }
            Err(e) => {
                let backup_path = path.with_extension(format!("corrupt.{}", std::process::id()));
                warn!(
                    "Store file at {} is corrupted ({}), moving it to {}",
                    path.display(),
                    e,
                    backup_path.display()
                );
                tokio::fs::rename(path, &backup_path)
                    .await
                    .map_err(StoreError::backup_failed)?;
                Ok(StoreDocument::default())
            }
        }
    }

    async fn persist(&self, document: &StoreDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;

        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        {
            let mut file = tokio::fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
            file.sync_all()
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        Ok(())
    }

    async fn mutate<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut StoreDocument),
    {
        let mut inner = self.inner.write().await;
        let mut document = inner.clone();
        apply(&mut document);
        self.persist(&document).await?;
        *inner = document;
        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.inner.read().await.find_user(user_id))
    }

    async fn upsert_user(&self, user: &User) -> Result<()> {
        self.mutate(|doc| doc.upsert_user(user)).await
    }
}

#[async_trait]
impl LedgerStore for JsonFileStore {
    async fn append_check_in(&self, check_in: &CheckIn) -> Result<()> {
        self.mutate(|doc| doc.append_check_in(check_in)).await
    }

    async fn check_ins_for_user(&self, user_id: &str) -> Result<Vec<CheckIn>> {
        Ok(self.inner.read().await.check_ins_for_user(user_id))
    }
}

#[async_trait]
impl TaskStore for JsonFileStore {
    async fn tasks_for_user(&self, user_id: &str) -> Result<Vec<Task>> {
        Ok(self.inner.read().await.tasks_for_user(user_id))
    }

    async fn insert_task(&self, task: &Task) -> Result<()> {
        self.mutate(|doc| doc.insert_task(task)).await
    }

    async fn remove_task(&self, user_id: &str, task_id: Uuid) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let mut document = inner.clone();
        let removed = document.remove_task(user_id, task_id);
        if removed {
            self.persist(&document).await?;
            *inner = document;
        }
        Ok(removed)
    }
}

#[async_trait]
impl BoardStore for JsonFileStore {
    async fn load_board(&self) -> Result<Option<Board>> {
        Ok(self.inner.read().await.board.clone())
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.mutate(|doc| doc.board = Some(board.clone())).await
    }
}
