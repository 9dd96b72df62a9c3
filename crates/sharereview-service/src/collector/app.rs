//! Aggregation of shares reported by pluggable app sources.

use std::sync::Arc;

use tracing::{debug, warn};

use sharereview_core::types::RawShare;
use sharereview_plugin::SourceRegistry;

/// Collects the shares of every registered source.
#[derive(Debug, Clone)]
pub struct AppShareAggregator {
    registry: Arc<SourceRegistry>,
}

impl AppShareAggregator {
    /// Creates an aggregator over `registry`.
    pub fn new(registry: Arc<SourceRegistry>) -> Self {
        Self { registry }
    }

    /// List the shares of all sources, tagged with the source name.
    ///
    /// A source whose listing fails is logged and contributes nothing.
    pub async fn collect(&self) -> Vec<RawShare> {
        let mut collected = Vec::new();

        for source in self.registry.sources().await.iter() {
            let shares = match source.shares().await {
                Ok(shares) => shares,
                Err(e) => {
                    warn!(source = %source.name(), error = %e, "Share source listing failed, skipping");
                    continue;
                }
            };

            debug!(source = %source.name(), count = shares.len(), "Collected app shares");
            collected.extend(shares.into_iter().map(|mut share| {
                share.app = source.name().to_string();
                share.action = share.id.clone();
                share
            }));
        }

        collected
    }
}
