//! JSON fixture document and the collaborator bundle built from it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use sharereview_core::error::{AppError, ErrorKind};
use sharereview_core::result::AppResult;
use sharereview_core::traits::SourceFactory;
use sharereview_core::types::FileShareRecord;

use crate::folders::{MemoryFolder, MemoryFolderResolver};
use crate::names::TableResolver;
use crate::restriction::StaticRestriction;
use crate::shares::MemoryShareBackend;
use crate::sources::{self, SourceFixture};

/// Display-name tables per identifier kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameTables {
    /// User id → display name.
    #[serde(default)]
    pub users: HashMap<String, String>,
    /// Group id → display name.
    #[serde(default)]
    pub groups: HashMap<String, String>,
    /// Room token → room name.
    #[serde(default)]
    pub rooms: HashMap<String, String>,
    /// Board id → board title.
    #[serde(default)]
    pub boards: HashMap<String, String>,
    /// Circle id → circle name.
    #[serde(default)]
    pub circles: HashMap<String, String>,
}

/// The complete fixture document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    /// Persisted file shares.
    #[serde(default)]
    pub file_shares: Vec<FileShareRecord>,
    /// Root folders by owner. Owners missing here cannot be resolved.
    #[serde(default)]
    pub folders: HashMap<String, MemoryFolder>,
    /// Display-name tables.
    #[serde(default)]
    pub names: NameTables,
    /// App share sources, in registration order.
    #[serde(default)]
    pub sources: Vec<SourceFixture>,
    /// Groups the app is restricted to.
    #[serde(default)]
    pub restricted_groups: Vec<String>,
}

impl Fixture {
    /// Read a fixture from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read fixture '{}'", path.display()),
                e,
            )
        })?;
        let fixture: Self = serde_json::from_str(&raw)?;

        info!(
            path = %path.display(),
            file_shares = fixture.file_shares.len(),
            sources = fixture.sources.len(),
            "Fixture loaded"
        );
        Ok(fixture)
    }
}

/// Every collaborator backed by one fixture.
#[derive(Clone)]
pub struct FixtureStore {
    /// File-share backend.
    pub shares: Arc<MemoryShareBackend>,
    /// Owner folder resolver.
    pub folders: Arc<MemoryFolderResolver>,
    /// User name resolver.
    pub users: Arc<TableResolver>,
    /// Group name resolver.
    pub groups: Arc<TableResolver>,
    /// Room name resolver.
    pub rooms: Arc<TableResolver>,
    /// Board name resolver.
    pub boards: Arc<TableResolver>,
    /// Circle name resolver.
    pub circles: Arc<TableResolver>,
    /// App restriction.
    pub restriction: Arc<StaticRestriction>,
    /// Source factories, in fixture order.
    pub source_factories: Vec<Arc<dyn SourceFactory>>,
}

impl FixtureStore {
    /// Build the collaborators described by `fixture`.
    pub fn new(fixture: Fixture) -> Self {
        let Fixture {
            file_shares,
            folders,
            names,
            sources: source_fixtures,
            restricted_groups,
        } = fixture;

        Self {
            shares: Arc::new(MemoryShareBackend::new(file_shares)),
            folders: Arc::new(MemoryFolderResolver::new(folders)),
            users: Arc::new(TableResolver::new(names.users)),
            groups: Arc::new(TableResolver::new(names.groups)),
            rooms: Arc::new(TableResolver::new(names.rooms)),
            boards: Arc::new(TableResolver::new(names.boards)),
            circles: Arc::new(TableResolver::new(names.circles)),
            restriction: Arc::new(StaticRestriction::new(restricted_groups)),
            source_factories: sources::factories(&source_fixtures),
        }
    }

    /// Load a fixture file and build its collaborators.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        Ok(Self::new(Fixture::load(path).await?))
    }
}
