//! Display-name cache keyed by (share type, identifier).

use std::collections::HashSet;
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, warn};

use sharereview_core::config::cache::CacheConfig;
use sharereview_core::types::ShareType;

use crate::resolvers::NameResolvers;

/// Memoizes display names for the lifetime of its owner.
///
/// Failed and missing resolvers yield the raw identifier, and that fallback
/// is cached as well, so each key reaches its resolver at most once while
/// the entry lives. Concurrent first lookups of one key are coalesced.
#[derive(Debug, Clone)]
pub struct DisplayNameCache {
    cache: Cache<(ShareType, String), String>,
    resolvers: NameResolvers,
}

impl DisplayNameCache {
    /// Create a cache bounded by `config`.
    pub fn new(config: &CacheConfig, resolvers: NameResolvers) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.time_to_live_seconds))
            .build();

        Self { cache, resolvers }
    }

    /// Resolve the display name of `id` for a share of `share_type`.
    pub async fn resolve(&self, share_type: ShareType, id: &str) -> String {
        self.cache
            .get_with((share_type, id.to_string()), self.lookup(share_type, id))
            .await
    }

    /// Resolve every distinct id concurrently so later lookups hit the cache.
    pub async fn prewarm<'a, I>(&self, share_type: ShareType, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: HashSet<&str> = ids.into_iter().collect();
        debug!(share_type = share_type.code(), count = distinct.len(), "Pre-warming display names");

        futures::future::join_all(distinct.into_iter().map(|id| self.resolve(share_type, id)))
            .await;
    }

    async fn lookup(&self, share_type: ShareType, id: &str) -> String {
        let Some(kind) = share_type.resolver() else {
            return id.to_string();
        };

        let Some(resolver) = self.resolvers.get(kind) else {
            debug!(?kind, id, "No resolver installed, using raw identifier");
            return id.to_string();
        };

        match resolver.resolve(id).await {
            Ok(name) => name,
            Err(e) => {
                warn!(?kind, id, error = %e, "Display name lookup failed");
                id.to_string()
            }
        }
    }
}
