//! File-share storage and filesystem lookup traits.

use std::sync::Arc;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{FileRef, FileShareRecord};

/// Persistent store of file shares.
#[async_trait]
pub trait FileShareBackend: Send + Sync + 'static {
    /// Fetch every persisted file share.
    async fn list_shares(&self) -> AppResult<Vec<FileShareRecord>>;

    /// Delete a share by full id (`<prefix>:<id>`).
    ///
    /// Fails with `ErrorKind::NotFound` when the share no longer exists.
    async fn delete_share(&self, full_id: &str) -> AppResult<()>;
}

/// Resolves a user's root folder.
#[async_trait]
pub trait FolderResolver: Send + Sync + 'static {
    /// Resolve the root folder of `owner`.
    ///
    /// Fails with `ErrorKind::NotFound` for deleted or inaccessible accounts.
    async fn resolve_owner_root(&self, owner: &str) -> AppResult<Arc<dyn Folder>>;
}

/// A user's root folder.
#[async_trait]
pub trait Folder: Send + Sync {
    /// All nodes with the given file id below this folder.
    async fn resolve_by_id(&self, file_id: &str) -> AppResult<Vec<FileRef>>;
}
