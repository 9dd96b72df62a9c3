//! Preference store persisted as a JSON document.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use sharereview_core::result::AppResult;
use sharereview_core::traits::PreferenceStore;

type Preferences = HashMap<String, HashMap<String, String>>;

/// Per-user preferences (`user → key → value`), optionally written through
/// to a JSON file after every change.
#[derive(Debug, Default)]
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
    values: RwLock<Preferences>,
}

impl FilePreferenceStore {
    /// A store that lives only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store at `path`, starting empty if the file does not exist.
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Preferences::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: Some(path),
            values: RwLock::new(values),
        })
    }

    async fn persist(&self, values: &Preferences) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, serde_json::to_vec_pretty(values)?).await?;
        debug!(path = %path.display(), "Preferences written");
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, user: &str, key: &str, default: &str) -> AppResult<String> {
        let values = self.values.read().await;
        Ok(values
            .get(user)
            .and_then(|prefs| prefs.get(key))
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    async fn set(&self, user: &str, key: &str, value: &str) -> AppResult<()> {
        let mut values = self.values.write().await;
        values
            .entry(user.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.persist(&values).await
    }
}
