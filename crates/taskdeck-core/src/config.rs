use serde::{Deserialize, Serialize};

/// Default base URL of the remote task API.
pub const DEFAULT_REMOTE_BASE_URL: &str = "http://localhost:3000/tasks";

/// Default autosave period in seconds.
pub const DEFAULT_AUTOSAVE_SECS: u64 = 30;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    /// Base URL of the remote task API. `GET <base_url>` returns the
    /// full task collection as a JSON array.
    pub base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REMOTE_BASE_URL.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BoardConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Period of the background autosave timer, in seconds.
    #[serde(default = "default_autosave_secs")]
    pub autosave_secs: u64,
}

fn default_autosave_secs() -> u64 {
    DEFAULT_AUTOSAVE_SECS
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            autosave_secs: DEFAULT_AUTOSAVE_SECS,
        }
    }
}
