//! Display-name cache configuration.

use serde::{Deserialize, Serialize};

/// Bounds for the per-pipeline display-name cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of (type, id) entries.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Time-to-live for resolved names in seconds.
    #[serde(default = "default_ttl")]
    pub time_to_live_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            time_to_live_seconds: default_ttl(),
        }
    }
}

fn default_max_capacity() -> u64 {
    10_000
}

fn default_ttl() -> u64 {
    3600
}
