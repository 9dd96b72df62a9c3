//! Ready-made [`SourceFactory`] implementations.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use sharereview_core::result::AppResult;
use sharereview_core::traits::{Source, SourceFactory};

/// Factory wrapping a source that is already constructed.
#[derive(Debug)]
pub struct InstanceFactory {
    source: Arc<dyn Source>,
}

impl InstanceFactory {
    /// Wraps an existing source.
    pub fn new(source: Arc<dyn Source>) -> Self {
        Self { source }
    }

    /// Wraps an existing source into an `Arc<dyn SourceFactory>`.
    pub fn wrap(source: Arc<dyn Source>) -> Arc<dyn SourceFactory> {
        Arc::new(Self::new(source))
    }
}

#[async_trait]
impl SourceFactory for InstanceFactory {
    fn label(&self) -> &str {
        self.source.name()
    }

    async fn create(&self) -> AppResult<Arc<dyn Source>> {
        Ok(self.source.clone())
    }
}

type CreateFn =
    dyn Fn() -> Pin<Box<dyn Future<Output = AppResult<Arc<dyn Source>>> + Send>> + Send + Sync;

/// A closure-based factory for sources whose construction can fail.
pub struct ClosureFactory {
    label: String,
    create: Arc<CreateFn>,
}

impl std::fmt::Debug for ClosureFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureFactory")
            .field("label", &self.label)
            .field("create", &"<closure>")
            .finish()
    }
}

impl ClosureFactory {
    /// Creates a factory that runs `create` on discovery.
    pub fn new<F, Fut>(label: &str, create: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AppResult<Arc<dyn Source>>> + Send + 'static,
    {
        Self {
            label: label.to_string(),
            create: Arc::new(move || Box::pin(create())),
        }
    }
}

#[async_trait]
impl SourceFactory for ClosureFactory {
    fn label(&self) -> &str {
        &self.label
    }

    async fn create(&self) -> AppResult<Arc<dyn Source>> {
        (self.create)().await
    }
}
