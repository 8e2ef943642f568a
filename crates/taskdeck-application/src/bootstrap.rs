//! Default wiring of the application against the platform store and the
//! configured remote.

use std::sync::Arc;
use std::time::Duration;

use taskdeck_core::error::Result;
use taskdeck_infrastructure::{JsonSnapshotStore, RestTaskSource};

use crate::board_service::BoardService;
use crate::load_strategy::LoadStrategy;

/// The fully wired application: service, reconciliation strategy, and the
/// configured autosave period.
pub struct App {
    pub service: Arc<BoardService>,
    pub strategy: LoadStrategy,
    pub autosave_period: Duration,
}

/// Builds the application from `config.toml` (or defaults) with the
/// platform snapshot store and the REST task source.
pub fn build_default() -> Result<App> {
    let config = taskdeck_infrastructure::config_loader::load_default_config()?;

    let store = Arc::new(JsonSnapshotStore::open_default()?);
    let source = Arc::new(RestTaskSource::from_config(&config.remote));
    let service = Arc::new(BoardService::new(store, source));
    let strategy = LoadStrategy::new(service.clone());

    Ok(App {
        service,
        strategy,
        autosave_period: Duration::from_secs(config.autosave_secs),
    })
}
