//! Snapshot store trait.
//!
//! Defines the interface for persisting the task collection locally,
//! together with the save/modified timestamps used for unsaved-change
//! detection.

use crate::error::Result;
use crate::task::Task;
use async_trait::async_trait;

/// Outcome of loading the persisted snapshot.
///
/// Corrupt data is distinguished from absent data so callers that care
/// can tell the two apart; callers that only want usable data treat
/// `Corrupt` as `NotFound` after logging it.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotLoad {
    /// A parseable snapshot was present.
    Found(Vec<Task>),
    /// No snapshot has been written.
    NotFound,
    /// A snapshot was present but could not be parsed.
    Corrupt(String),
}

/// Repository for the locally persisted board snapshot.
///
/// Backed by an origin-scoped key-value store in the original system;
/// implementations here use per-key files. The store tracks two epoch
/// millisecond timestamps: when the snapshot was last saved and when the
/// board was last mutated.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Serializes the full task sequence and records the save time.
    ///
    /// Errors from the underlying storage propagate to the caller; the
    /// autosave loop is expected to log and carry on.
    async fn save(&self, tasks: &[Task]) -> Result<()>;

    /// Reads the persisted snapshot.
    async fn load(&self) -> SnapshotLoad;

    /// Epoch milliseconds of the last successful save, if any.
    async fn last_saved_time(&self) -> Option<i64>;

    /// Records the current time as the last mutation time.
    ///
    /// Called by every board mutation.
    async fn mark_modified(&self) -> Result<()>;

    /// True iff both timestamps are set and the last mutation is newer
    /// than the last save.
    async fn has_unsaved_changes(&self) -> bool;
}
