//! Per-user preferences and app-level access configuration.

use async_trait::async_trait;

use crate::result::AppResult;

/// Key/value store of per-user preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync + 'static {
    /// Read a preference, returning `default` when it is unset.
    async fn get(&self, user: &str, key: &str, default: &str) -> AppResult<String>;

    /// Write a preference. A single-key write is treated as atomic.
    async fn set(&self, user: &str, key: &str, value: &str) -> AppResult<()>;
}

/// App restriction settings of the host.
#[async_trait]
pub trait AppRestriction: Send + Sync + 'static {
    /// Groups the review app is limited to. Empty means everyone.
    async fn restricted_groups(&self) -> AppResult<Vec<String>>;
}
