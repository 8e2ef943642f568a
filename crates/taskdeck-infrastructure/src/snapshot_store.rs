//! Snapshot store implementation over the file key-value store.
//!
//! Persists the board under the same keys the original browser storage
//! used: `tasks` (JSON array), `lastSaved` and `lastModified` (decimal
//! epoch milliseconds).

use async_trait::async_trait;
use chrono::Utc;

use taskdeck_core::error::{Result, TaskdeckError};
use taskdeck_core::store::{SnapshotLoad, SnapshotStore};
use taskdeck_core::task::Task;

use crate::kv::FileKeyValueStore;
use crate::paths::TaskdeckPaths;

/// Key holding the JSON snapshot of the full task sequence.
pub const KEY_TASKS: &str = "tasks";
/// Key holding the epoch-ms timestamp of the last successful save.
pub const KEY_LAST_SAVED: &str = "lastSaved";
/// Key holding the epoch-ms timestamp of the last board mutation.
pub const KEY_LAST_MODIFIED: &str = "lastModified";

/// File-backed [`SnapshotStore`].
///
/// All file I/O runs on the blocking pool; values are small (one JSON
/// array and two decimal strings).
#[derive(Clone)]
pub struct JsonSnapshotStore {
    kv: FileKeyValueStore,
}

impl JsonSnapshotStore {
    /// Creates a store over an existing key-value directory.
    pub fn new(kv: FileKeyValueStore) -> Self {
        Self { kv }
    }

    /// Creates a store over the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dir = TaskdeckPaths::store_dir()
            .map_err(|e| TaskdeckError::config(e.to_string()))?;
        Ok(Self::new(FileKeyValueStore::new(dir)))
    }

    async fn read_timestamp(&self, key: &'static str) -> Option<i64> {
        let kv = self.kv.clone();
        let value = tokio::task::spawn_blocking(move || kv.get(key))
            .await
            .ok()?
            .ok()??;
        value.trim().parse::<i64>().ok()
    }

    async fn write_timestamp(&self, key: &'static str, millis: i64) -> Result<()> {
        let kv = self.kv.clone();
        tokio::task::spawn_blocking(move || kv.set(key, &millis.to_string()))
            .await
            .map_err(|e| TaskdeckError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        let now = Utc::now().timestamp_millis();

        let kv = self.kv.clone();
        tokio::task::spawn_blocking(move || {
            kv.set(KEY_TASKS, &json)?;
            kv.set(KEY_LAST_SAVED, &now.to_string())
        })
        .await
        .map_err(|e| TaskdeckError::internal(format!("Failed to join task: {}", e)))??;

        tracing::debug!(count = tasks.len(), "saved board snapshot");
        Ok(())
    }

    async fn load(&self) -> SnapshotLoad {
        let kv = self.kv.clone();
        let read = tokio::task::spawn_blocking(move || kv.get(KEY_TASKS)).await;

        let value = match read {
            Ok(Ok(Some(value))) => value,
            Ok(Ok(None)) => return SnapshotLoad::NotFound,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "failed to read board snapshot");
                return SnapshotLoad::Corrupt(e.to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "snapshot read task failed");
                return SnapshotLoad::Corrupt(e.to_string());
            }
        };

        match serde_json::from_str::<Vec<Task>>(&value) {
            Ok(tasks) => SnapshotLoad::Found(tasks),
            Err(e) => {
                tracing::warn!(error = %e, "board snapshot is corrupt");
                SnapshotLoad::Corrupt(e.to_string())
            }
        }
    }

    async fn last_saved_time(&self) -> Option<i64> {
        self.read_timestamp(KEY_LAST_SAVED).await
    }

    async fn mark_modified(&self) -> Result<()> {
        self.write_timestamp(KEY_LAST_MODIFIED, Utc::now().timestamp_millis())
            .await
    }

    async fn has_unsaved_changes(&self) -> bool {
        let saved = self.read_timestamp(KEY_LAST_SAVED).await;
        let modified = self.read_timestamp(KEY_LAST_MODIFIED).await;
        match (saved, modified) {
            (Some(saved), Some(modified)) => modified > saved,
            _ => false,
        }
    }
}
