//! Pluggable share source traits.

use std::sync::Arc;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::RawShare;

/// A provider of application-specific shares (chat rooms, boards, ...).
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug + 'static {
    /// Unique source name. Doubles as the app namespace of its shares.
    fn name(&self) -> &str;

    /// List the shares this source currently holds.
    async fn shares(&self) -> AppResult<Vec<RawShare>>;

    /// Delete one share by its source-local identifier.
    ///
    /// Returns `false` if the source refused or did not know the id.
    async fn delete_share(&self, id: &str) -> AppResult<bool>;
}

/// A handle able to construct a [`Source`].
///
/// Factories are injected into the registry at startup; construction is
/// deferred until the first aggregation or deletion needs the sources.
#[async_trait]
pub trait SourceFactory: Send + Sync + 'static {
    /// Label used in logs when construction fails.
    fn label(&self) -> &str;

    /// Build the source.
    async fn create(&self) -> AppResult<Arc<dyn Source>>;
}
