//! Startup reconciliation between the local snapshot and the remote API.
//!
//! A single linear run decides which source populates the board: local
//! data with unsaved changes is authoritative and skips the remote fetch
//! entirely; otherwise the remote wins, with clean local data kept as a
//! degraded fallback when the fetch fails.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use taskdeck_core::error::{Result, TaskdeckError};
use taskdeck_core::store::SnapshotLoad;

use crate::board_service::BoardService;

/// How the board ended up populated after a reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootStatus {
    /// Local data had unsaved changes; the remote was never contacted.
    LocalUnsaved,
    /// The remote fetch succeeded and replaced the board wholesale.
    Synced,
    /// The remote was unavailable; clean local data was kept.
    LocalFallback,
}

impl std::fmt::Display for BootStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootStatus::LocalUnsaved => write!(f, "local (unsaved changes)"),
            BootStatus::Synced => write!(f, "synced"),
            BootStatus::LocalFallback => write!(f, "using local (remote unavailable)"),
        }
    }
}

/// Runs the startup reconciliation against a [`BoardService`].
///
/// `run` is re-entrant only via explicit retry after completion; a
/// second invocation while one is in flight fails with
/// [`TaskdeckError::AlreadyRunning`] instead of interleaving two runs.
pub struct LoadStrategy {
    service: Arc<BoardService>,
    in_flight: Mutex<()>,
}

impl LoadStrategy {
    pub fn new(service: Arc<BoardService>) -> Self {
        Self {
            service,
            in_flight: Mutex::new(()),
        }
    }

    /// Runs one reconciliation pass to completion.
    ///
    /// 1. Load the local snapshot; if found, populate the board right
    ///    away so there is something to render.
    /// 2. Local data with unsaved changes wins outright.
    /// 3. Otherwise fetch from the remote and replace the board; on
    ///    failure keep clean local data if there was any, else surface
    ///    the remote error to the caller.
    ///
    /// A corrupt snapshot is logged and treated as missing.
    pub async fn run(&self) -> Result<BootStatus> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| TaskdeckError::AlreadyRunning)?;

        let store = self.service.store();
        let source = self.service.source();

        let mut have_local = false;
        match store.load().await {
            SnapshotLoad::Found(tasks) => {
                tracing::info!(count = tasks.len(), "loaded board from local snapshot");
                self.service.replace_all(tasks).await;
                have_local = true;

                if store.has_unsaved_changes().await {
                    tracing::info!("local snapshot has unsaved changes, skipping remote fetch");
                    return Ok(BootStatus::LocalUnsaved);
                }
            }
            SnapshotLoad::NotFound => {}
            SnapshotLoad::Corrupt(message) => {
                tracing::warn!(error = %message, "local snapshot corrupt, treating as missing");
            }
        }

        match source.fetch_all().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "synced board from remote");
                self.service.replace_all(records).await;
                Ok(BootStatus::Synced)
            }
            Err(e) if have_local => {
                // Clean local data is already on the board; degrade.
                tracing::warn!(error = %e, "remote unavailable, keeping local data");
                Ok(BootStatus::LocalFallback)
            }
            Err(e) => {
                tracing::error!(error = %e, "no local data and remote fetch failed");
                Err(e)
            }
        }
    }
}
