//! Static app share sources.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use sharereview_core::error::AppError;
use sharereview_core::result::AppResult;
use sharereview_core::traits::{Source, SourceFactory};
use sharereview_core::types::RawShare;
use sharereview_plugin::{ClosureFactory, InstanceFactory};

/// Fixture description of one app source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFixture {
    /// Source name (app namespace).
    pub name: String,
    /// Shares the source reports.
    #[serde(default)]
    pub shares: Vec<RawShare>,
    /// Whether the source fails to construct.
    #[serde(default)]
    pub broken: bool,
    /// Whether the source's share listing fails.
    #[serde(default)]
    pub failing: bool,
}

/// A source serving a fixed, deletable list of shares.
#[derive(Debug)]
pub struct StaticSource {
    name: String,
    shares: RwLock<Vec<RawShare>>,
    failing: bool,
}

impl StaticSource {
    /// Create a source named `name` serving `shares`.
    pub fn new(name: impl Into<String>, shares: Vec<RawShare>) -> Self {
        Self {
            name: name.into(),
            shares: RwLock::new(shares),
            failing: false,
        }
    }

    /// Make every share listing fail.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

#[async_trait]
impl Source for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn shares(&self) -> AppResult<Vec<RawShare>> {
        if self.failing {
            return Err(AppError::external_service(format!(
                "Source '{}' is unavailable",
                self.name
            )));
        }
        Ok(self.shares.read().await.clone())
    }

    async fn delete_share(&self, id: &str) -> AppResult<bool> {
        let mut shares = self.shares.write().await;
        let before = shares.len();
        shares.retain(|s| s.id != id);

        let deleted = shares.len() != before;
        if deleted {
            info!(source = %self.name, share_id = %id, "App share deleted");
        }
        Ok(deleted)
    }
}

/// Build one factory per fixture source, in fixture order.
pub fn factories(fixtures: &[SourceFixture]) -> Vec<Arc<dyn SourceFactory>> {
    fixtures
        .iter()
        .map(|fixture| -> Arc<dyn SourceFactory> {
            if fixture.broken {
                let name = fixture.name.clone();
                return Arc::new(ClosureFactory::new(&fixture.name, move || {
                    let name = name.clone();
                    async move {
                        Err::<Arc<dyn Source>, _>(AppError::plugin(format!(
                            "Source '{name}' could not be loaded"
                        )))
                    }
                }));
            }

            let mut source = StaticSource::new(fixture.name.clone(), fixture.shares.clone());
            if fixture.failing {
                source = source.failing();
            }
            InstanceFactory::wrap(Arc::new(source))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use sharereview_core::types::ShareType;

    fn share(id: &str) -> RawShare {
        RawShare {
            id: id.to_string(),
            app: String::new(),
            action: String::new(),
            share_type: ShareType::Room,
            object: "Weekly sync".to_string(),
            initiator: "alice".to_string(),
            recipient: "room-1".to_string(),
            permissions: 1,
            has_password: false,
            expiration: None,
            time: 100,
        }
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let source = StaticSource::new("spreed", vec![share("1"), share("2")]);
        assert!(source.delete_share("1").await.unwrap());
        assert!(!source.delete_share("1").await.unwrap());
        assert_eq!(source.shares().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_broken_fixture_fails_to_create() {
        let fixtures = vec![SourceFixture {
            name: "deck".into(),
            shares: Vec::new(),
            broken: true,
            failing: false,
        }];
        let factories = factories(&fixtures);
        assert_eq!(factories[0].label(), "deck");
        assert!(factories[0].create().await.is_err());
    }
}
