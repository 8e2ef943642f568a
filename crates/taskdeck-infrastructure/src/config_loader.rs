//! Configuration loading.
//!
//! Reads `config.toml` from the platform config directory; a missing file
//! yields the defaults (localhost remote, 30 second autosave).

use std::path::Path;

use taskdeck_core::config::BoardConfig;
use taskdeck_core::error::{Result, TaskdeckError};

use crate::paths::TaskdeckPaths;

/// Loads the board configuration from the given file.
///
/// # Returns
///
/// - `Ok(BoardConfig)`: Parsed config, or defaults when the file is absent
/// - `Err`: The file exists but could not be read or parsed
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BoardConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: BoardConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Loads the board configuration from the platform config directory.
pub fn load_default_config() -> Result<BoardConfig> {
    let path = TaskdeckPaths::config_file()
        .map_err(|e| TaskdeckError::config(e.to_string()))?;
    load_config(&path)
}
