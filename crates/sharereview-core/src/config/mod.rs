//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file via the
//! `config` crate, overlaid with `SHAREREVIEW__*` environment variables.
//! Every field carries a default so an empty file is valid.

pub mod cache;
pub mod logging;
pub mod review;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::logging::LoggingConfig;
use self::review::ReviewConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Review feed settings.
    #[serde(default)]
    pub review: ReviewConfig,
    /// Display-name cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables use the `SHAREREVIEW`
    /// prefix and `__` as the section separator, e.g.
    /// `SHAREREVIEW__REVIEW__INCLUDE_ROOM_SHARES=true`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SHAREREVIEW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
