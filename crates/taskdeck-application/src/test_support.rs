//! In-memory doubles for the storage and remote seams, shared by the
//! service and load-strategy tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use taskdeck_core::error::{Result, TaskdeckError};
use taskdeck_core::store::{SnapshotLoad, SnapshotStore};
use taskdeck_core::task::{RemoteTaskSource, Task, TaskDraft};

/// In-memory [`SnapshotStore`] with a logical clock.
///
/// Timestamps come from a monotonically increasing counter so that
/// "modified after saved" is deterministic even within one millisecond.
pub struct MemorySnapshotStore {
    tasks: Mutex<Option<Vec<Task>>>,
    corrupt: Mutex<Option<String>>,
    saved: Mutex<Option<i64>>,
    modified: Mutex<Option<i64>>,
    clock: AtomicI64,
}

impl MemorySnapshotStore {
    /// A store with nothing persisted.
    pub fn empty() -> Self {
        Self {
            tasks: Mutex::new(None),
            corrupt: Mutex::new(None),
            saved: Mutex::new(None),
            modified: Mutex::new(None),
            clock: AtomicI64::new(1),
        }
    }

    /// A store pre-seeded with a snapshot and explicit timestamps.
    pub fn with_snapshot(tasks: Vec<Task>, saved: i64, modified: i64) -> Self {
        let store = Self::empty();
        *store.tasks.lock().unwrap() = Some(tasks);
        *store.saved.lock().unwrap() = Some(saved);
        *store.modified.lock().unwrap() = Some(modified);
        store.clock.store(saved.max(modified) + 1, Ordering::SeqCst);
        store
    }

    /// A store whose snapshot cannot be parsed.
    pub fn corrupt(message: &str) -> Self {
        let store = Self::empty();
        *store.corrupt.lock().unwrap() = Some(message.to_string());
        store
    }

    fn tick(&self) -> i64 {
        self.clock.fetch_add(1, Ordering::SeqCst)
    }

    pub fn saved_tasks(&self) -> Option<Vec<Task>> {
        self.tasks.lock().unwrap().clone()
    }

    pub fn modified_time(&self) -> Option<i64> {
        *self.modified.lock().unwrap()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.lock().unwrap() = Some(tasks.to_vec());
        *self.corrupt.lock().unwrap() = None;
        *self.saved.lock().unwrap() = Some(self.tick());
        Ok(())
    }

    async fn load(&self) -> SnapshotLoad {
        if let Some(message) = self.corrupt.lock().unwrap().clone() {
            return SnapshotLoad::Corrupt(message);
        }
        match self.tasks.lock().unwrap().clone() {
            Some(tasks) => SnapshotLoad::Found(tasks),
            None => SnapshotLoad::NotFound,
        }
    }

    async fn last_saved_time(&self) -> Option<i64> {
        *self.saved.lock().unwrap()
    }

    async fn mark_modified(&self) -> Result<()> {
        *self.modified.lock().unwrap() = Some(self.tick());
        Ok(())
    }

    async fn has_unsaved_changes(&self) -> bool {
        match (*self.saved.lock().unwrap(), *self.modified.lock().unwrap()) {
            (Some(saved), Some(modified)) => modified > saved,
            _ => false,
        }
    }
}

/// [`RemoteTaskSource`] double that records which endpoints were hit.
///
/// Fabricated ids come from a counter instead of the wall clock so that
/// back-to-back creates never collide within a millisecond.
pub struct MockTaskSource {
    /// Records returned by `fetch_all`.
    pub records: Vec<Task>,
    /// When set, `fetch_all` fails with this message.
    pub fetch_error: Option<String>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    next_id: AtomicI64,
}

impl Default for MockTaskSource {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            fetch_error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicI64::new(1_000),
        }
    }
}

impl MockTaskSource {
    pub fn serving(records: Vec<Task>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fetch_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Handle onto the call log, for asserting which endpoints ran.
    pub fn calls(&self) -> Arc<Mutex<Vec<&'static str>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl RemoteTaskSource for MockTaskSource {
    async fn fetch_all(&self) -> Result<Vec<Task>> {
        self.calls.lock().unwrap().push("fetch_all");
        match &self.fetch_error {
            Some(message) => Err(TaskdeckError::remote(message.clone())),
            None => Ok(self.records.clone()),
        }
    }

    async fn create(&self, draft: &TaskDraft) -> Result<Task> {
        self.calls.lock().unwrap().push("create");
        Ok(Task {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: None,
        })
    }

    async fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        self.calls.lock().unwrap().push("update");
        Ok(Task {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: None,
        })
    }

    async fn delete(&self, _id: i64) -> Result<()> {
        self.calls.lock().unwrap().push("delete");
        Ok(())
    }
}
