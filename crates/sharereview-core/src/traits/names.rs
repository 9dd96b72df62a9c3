//! Display-name resolver trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Resolves identifiers of one kind (users, groups, rooms...) to display names.
#[async_trait]
pub trait NameResolver: Send + Sync + 'static {
    /// Resolve `id` to a human-readable name.
    async fn resolve(&self, id: &str) -> AppResult<String>;
}
