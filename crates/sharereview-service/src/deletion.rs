//! Deletion routing by composite share id.

use std::sync::Arc;

use tracing::{info, warn};

use sharereview_core::result::AppResult;
use sharereview_core::traits::FileShareBackend;
use sharereview_plugin::SourceRegistry;

use crate::action::{ActionEncoder, FILES_NAMESPACE};

/// Routes a delete request to the file-share backend or to the owning source.
#[derive(Clone)]
pub struct DeletionRouter {
    backend: Arc<dyn FileShareBackend>,
    registry: Arc<SourceRegistry>,
}

impl std::fmt::Debug for DeletionRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletionRouter")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl DeletionRouter {
    /// Creates a router.
    pub fn new(backend: Arc<dyn FileShareBackend>, registry: Arc<SourceRegistry>) -> Self {
        Self { backend, registry }
    }

    /// Delete the share addressed by `composite_id`.
    ///
    /// - malformed id: `ErrorKind::Validation`
    /// - file share that no longer exists: `ErrorKind::NotFound`
    /// - namespace with no registered source: `Ok(false)`
    pub async fn delete(&self, composite_id: &str) -> AppResult<bool> {
        let (app, action) = ActionEncoder::decode(composite_id)?;

        if app == FILES_NAMESPACE {
            self.backend.delete_share(&action).await?;
            info!(share_id = %action, "Deleted file share");
            return Ok(true);
        }

        let Some(source) = self.registry.get(&app).await else {
            warn!(app = %app, share_id = %action, "No share source registered for namespace");
            return Ok(false);
        };

        let deleted = source.delete_share(&action).await?;
        info!(app = %app, share_id = %action, deleted, "Delegated share deletion");
        Ok(deleted)
    }
}
