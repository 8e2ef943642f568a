//! UI preference storage.
//!
//! Persists the two presentation preferences the original kept alongside
//! the board snapshot: color theme and sidebar visibility. Outside the
//! reconciliation core; carried for completeness.

use taskdeck_core::error::Result;

use crate::kv::FileKeyValueStore;

/// Key holding the color theme (`"dark"` or `"light"`).
pub const KEY_THEME: &str = "theme";
/// Key holding the sidebar visibility (`"true"` or `"false"`).
pub const KEY_SIDEBAR_HIDDEN: &str = "sidebarHidden";

/// The UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Typed accessors over the preference keys.
///
/// Unknown stored values fall back to the defaults (light theme, sidebar
/// shown) instead of erroring.
#[derive(Clone)]
pub struct UiPrefs {
    kv: FileKeyValueStore,
}

impl UiPrefs {
    pub fn new(kv: FileKeyValueStore) -> Self {
        Self { kv }
    }

    /// Returns the stored theme, defaulting to light.
    pub fn theme(&self) -> Theme {
        self.kv
            .get(KEY_THEME)
            .ok()
            .flatten()
            .and_then(|v| Theme::parse(v.trim()))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.kv.set(KEY_THEME, theme.as_str())
    }

    /// Returns whether the sidebar is hidden, defaulting to shown.
    pub fn sidebar_hidden(&self) -> bool {
        self.kv
            .get(KEY_SIDEBAR_HIDDEN)
            .ok()
            .flatten()
            .map(|v| v.trim() == "true")
            .unwrap_or(false)
    }

    pub fn set_sidebar_hidden(&self, hidden: bool) -> Result<()> {
        self.kv
            .set(KEY_SIDEBAR_HIDDEN, if hidden { "true" } else { "false" })
    }
}
