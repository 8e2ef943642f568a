//! Background autosave timer.
//!
//! Periodically checks whether the board has unsaved changes and writes a
//! snapshot when it does. The only source of recurring, caller-uninitiated
//! execution in the system.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::board_service::BoardService;

/// Spawns the autosave loop.
///
/// Every `period` the loop checks [`BoardService::has_unsaved_changes`]
/// and saves when true. Save failures are logged and the loop carries on;
/// the next tick retries naturally. Cancel via the returned token's
/// counterpart to stop the task.
pub fn spawn_autosave(
    service: Arc<BoardService>,
    period: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick of a tokio interval fires immediately; consume it
        // so the first save check happens one full period after startup.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("autosave loop stopped");
                    break;
                }
                _ = interval.tick() => {
                    if service.has_unsaved_changes().await {
                        match service.save().await {
                            Ok(()) => tracing::info!("auto-saved"),
                            Err(e) => tracing::warn!(error = %e, "autosave failed"),
                        }
                    }
                }
            }
        }
    })
}
