//! Review feed configuration.

use serde::{Deserialize, Serialize};

/// Settings for the review pipeline and its fixture-backed collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Include room (chat) shares when no per-user preference is stored.
    #[serde(default)]
    pub include_room_shares: bool,
    /// Path to the JSON fixture holding shares, folders, names and sources.
    #[serde(default = "default_fixture_path")]
    pub fixture_path: String,
    /// Path where user preferences (watermark, show-talk) are persisted.
    #[serde(default = "default_preferences_path")]
    pub preferences_path: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            include_room_shares: false,
            fixture_path: default_fixture_path(),
            preferences_path: default_preferences_path(),
        }
    }
}

fn default_fixture_path() -> String {
    "data/fixture.json".to_string()
}

fn default_preferences_path() -> String {
    "data/preferences.json".to_string()
}
