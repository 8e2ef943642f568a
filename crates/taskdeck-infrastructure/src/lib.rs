pub mod config_loader;
pub mod kv;
pub mod paths;
pub mod prefs;
pub mod rest_source;
pub mod snapshot_store;

pub use crate::kv::FileKeyValueStore;
pub use crate::prefs::{Theme, UiPrefs};
pub use crate::rest_source::RestTaskSource;
pub use crate::snapshot_store::JsonSnapshotStore;
