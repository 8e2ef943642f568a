//! Unified path management for taskdeck configuration and data files.
//!
//! All taskdeck configuration and persisted board data live under the
//! platform config/data directories, resolved via the `dirs` crate.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for taskdeck.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/taskdeck/          # Config directory
/// └── config.toml              # Application configuration (remote URL, autosave)
///
/// ~/.local/share/taskdeck/     # Data directory
/// └── store/                   # Key-value store files
///     ├── tasks                # JSON snapshot of the board
///     ├── lastSaved            # Epoch ms of the last save
///     ├── lastModified         # Epoch ms of the last mutation
///     ├── theme                # UI preference
///     └── sidebarHidden        # UI preference
/// ```
pub struct TaskdeckPaths;

impl TaskdeckPaths {
    /// Returns the taskdeck configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/taskdeck/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|d| d.join("taskdeck"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the taskdeck data directory.
    ///
    /// This is where the persistent key-value store lives.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/taskdeck/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_local_dir()
            .map(|d| d.join("taskdeck"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the key-value store directory.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }
}
