//! In-memory file-share backend.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use sharereview_core::error::AppError;
use sharereview_core::result::AppResult;
use sharereview_core::traits::FileShareBackend;
use sharereview_core::types::FileShareRecord;

/// File shares held in memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryShareBackend {
    shares: RwLock<Vec<FileShareRecord>>,
}

impl MemoryShareBackend {
    /// Create a backend holding `shares`.
    pub fn new(shares: Vec<FileShareRecord>) -> Self {
        Self {
            shares: RwLock::new(shares),
        }
    }

    /// Number of shares currently stored.
    pub async fn len(&self) -> usize {
        self.shares.read().await.len()
    }

    /// Whether the backend holds no shares.
    pub async fn is_empty(&self) -> bool {
        self.shares.read().await.is_empty()
    }
}

#[async_trait]
impl FileShareBackend for MemoryShareBackend {
    async fn list_shares(&self) -> AppResult<Vec<FileShareRecord>> {
        Ok(self.shares.read().await.clone())
    }

    async fn delete_share(&self, full_id: &str) -> AppResult<()> {
        let mut shares = self.shares.write().await;
        let idx = shares
            .iter()
            .position(|s| s.full_id() == full_id)
            .ok_or_else(|| AppError::not_found(format!("Share '{full_id}' not found")))?;

        shares.remove(idx);
        info!(share_id = %full_id, "File share deleted");
        Ok(())
    }
}
