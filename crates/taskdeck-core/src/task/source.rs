//! Remote task source trait.
//!
//! Defines the interface to the remote task API.

use super::model::{Task, TaskDraft};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract source of task records backed by a remote API.
///
/// The remote API is read-only in practice: only `fetch_all` performs a
/// real wire call. The mutation endpoints are client-side stubs that
/// always resolve, mirroring a backend that has no real persistence.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Surface transport and non-2xx failures from `fetch_all` as
///   `TaskdeckError::Remote`
/// - Keep the mutation stubs infallible
#[async_trait]
pub trait RemoteTaskSource: Send + Sync {
    /// Fetches the full collection of task records.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Task>)`: The records as returned by the API
    /// - `Err(_)`: Transport failure or non-2xx response
    async fn fetch_all(&self) -> Result<Vec<Task>>;

    /// Creates a task record from a draft.
    ///
    /// Stub behavior: fabricates an id (epoch milliseconds) and copies
    /// title/description/status from the draft. Priority is not
    /// forwarded by this path.
    async fn create(&self, draft: &TaskDraft) -> Result<Task>;

    /// Produces the canonical updated record for `id` from a draft.
    ///
    /// Stub behavior: echoes the draft fields under the given id.
    /// Priority is not forwarded by this path.
    async fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task>;

    /// Deletes a task record.
    ///
    /// Stub behavior: always succeeds, whether or not the id exists.
    async fn delete(&self, id: i64) -> Result<()>;
}
