//! In-memory owner folders.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use sharereview_core::error::AppError;
use sharereview_core::result::AppResult;
use sharereview_core::traits::{Folder, FolderResolver};
use sharereview_core::types::FileRef;

/// One owner's root folder: file id → matching paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryFolder {
    /// Paths by file id. A file id may appear at several paths.
    #[serde(default)]
    pub files: HashMap<String, Vec<String>>,
    /// File ids whose lookup fails (storage unavailable).
    #[serde(default)]
    pub unreadable: HashSet<String>,
}

#[async_trait]
impl Folder for MemoryFolder {
    async fn resolve_by_id(&self, file_id: &str) -> AppResult<Vec<FileRef>> {
        if self.unreadable.contains(file_id) {
            return Err(AppError::storage(format!("File '{file_id}' is not readable")));
        }

        let refs = self
            .files
            .get(file_id)
            .map(|paths| paths.iter().map(|path| FileRef { path: path.clone() }).collect())
            .unwrap_or_default();
        Ok(refs)
    }
}

/// Resolves owners to their in-memory folders.
#[derive(Debug, Clone, Default)]
pub struct MemoryFolderResolver {
    folders: HashMap<String, Arc<MemoryFolder>>,
}

impl MemoryFolderResolver {
    /// Create a resolver over `folders` keyed by owner.
    pub fn new(folders: HashMap<String, MemoryFolder>) -> Self {
        Self {
            folders: folders
                .into_iter()
                .map(|(owner, folder)| (owner, Arc::new(folder)))
                .collect(),
        }
    }
}

#[async_trait]
impl FolderResolver for MemoryFolderResolver {
    async fn resolve_owner_root(&self, owner: &str) -> AppResult<Arc<dyn Folder>> {
        let folder: Arc<dyn Folder> = self
            .folders
            .get(owner)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("No root folder for user '{owner}'")))?;
        Ok(folder)
    }
}
