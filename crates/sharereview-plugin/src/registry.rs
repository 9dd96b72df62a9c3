//! Source registry: discovers share sources once and keeps them for the session.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use sharereview_core::traits::{Source, SourceFactory};
use sharereview_core::types::namespace::is_valid_source_namespace;

/// Discovered sources keyed by name, iterated in registration order.
#[derive(Debug, Default)]
pub struct SourceMap {
    sources: Vec<Arc<dyn Source>>,
    by_name: HashMap<String, usize>,
}

impl SourceMap {
    /// Inserts a source unless its name is taken. Returns whether it was kept.
    fn insert(&mut self, source: Arc<dyn Source>) -> bool {
        let name = source.name().to_string();
        if self.by_name.contains_key(&name) {
            return false;
        }
        self.by_name.insert(name, self.sources.len());
        self.sources.push(source);
        true
    }

    /// Gets a source by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Source>> {
        self.by_name.get(name).map(|&idx| &self.sources[idx])
    }

    /// Iterates sources in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Source>> {
        self.sources.iter()
    }

    /// Names of all sources in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no source was registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Registry of pluggable share sources.
///
/// Factories are injected at construction; the first call to
/// [`sources`](Self::sources) instantiates them and the resulting map is
/// reused by every later aggregation and deletion.
pub struct SourceRegistry {
    factories: Vec<Arc<dyn SourceFactory>>,
    sources: OnceCell<SourceMap>,
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("factories", &self.factories.len())
            .field("sources", &self.sources.get())
            .finish()
    }
}

impl SourceRegistry {
    /// Creates a registry over the given factories.
    pub fn new(factories: Vec<Arc<dyn SourceFactory>>) -> Self {
        Self {
            factories,
            sources: OnceCell::new(),
        }
    }

    /// Creates a registry with no sources.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the discovered sources, discovering them on first use.
    pub async fn sources(&self) -> &SourceMap {
        self.sources.get_or_init(|| self.discover()).await
    }

    /// Gets a source by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn Source>> {
        self.sources().await.get(name).cloned()
    }

    async fn discover(&self) -> SourceMap {
        let mut map = SourceMap::default();

        for factory in &self.factories {
            let source = match factory.create().await {
                Ok(source) => source,
                Err(e) => {
                    warn!(factory = %factory.label(), error = %e, "Share source failed to initialize, skipping");
                    continue;
                }
            };

            let name = source.name().to_string();
            if !is_valid_source_namespace(&name) {
                warn!(source = %name, "Share source name is not a usable namespace, skipping");
                continue;
            }
            if map.insert(source) {
                info!(source = %name, "Registered share source");
            } else {
                warn!(source = %name, "Share source name already registered, keeping the first");
            }
        }

        info!(count = map.len(), "Share source discovery complete");
        map
    }
}
