//! File-share collection with per-owner batched path resolution.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, warn};

use sharereview_core::traits::{FileShareBackend, Folder, FolderResolver};
use sharereview_core::types::{FileShareRecord, RawShare, ShareType};

use crate::action::FILES_NAMESPACE;

/// Object description of shares whose owner folder cannot be resolved.
pub const INVALID_SHARE_OBJECT: &str = "Invalid share";

/// Loads persisted file shares and resolves the path of each shared file.
#[derive(Clone)]
pub struct FileShareCollector {
    backend: Arc<dyn FileShareBackend>,
    folders: Arc<dyn FolderResolver>,
}

impl std::fmt::Debug for FileShareCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileShareCollector").finish_non_exhaustive()
    }
}

impl FileShareCollector {
    /// Creates a collector over the share backend and folder resolver.
    pub fn new(backend: Arc<dyn FileShareBackend>, folders: Arc<dyn FolderResolver>) -> Self {
        Self { backend, folders }
    }

    /// Collect all file shares as raw shares.
    ///
    /// Room shares are dropped unless `include_room_shares` is set. Owners
    /// are processed independently; a broken owner only marks its own
    /// shares invalid.
    pub async fn collect(&self, include_room_shares: bool) -> Vec<RawShare> {
        let records = match self.backend.list_shares().await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Failed to load file shares");
                return Vec::new();
            }
        };

        let groups = group_by_initiator(
            records
                .into_iter()
                .filter(|r| include_room_shares || r.share_type != ShareType::Room),
        );

        let batches = groups
            .into_iter()
            .map(|(owner, shares)| self.collect_owner(owner, shares));

        futures::future::join_all(batches)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn collect_owner(&self, owner: String, shares: Vec<FileShareRecord>) -> Vec<RawShare> {
        let root = match self.folders.resolve_owner_root(&owner).await {
            Ok(root) => root,
            Err(e) => {
                warn!(owner = %owner, shares = shares.len(), error = %e, "Owner folder unavailable, marking shares invalid");
                return shares
                    .into_iter()
                    .map(|record| to_raw(record, INVALID_SHARE_OBJECT.to_string()))
                    .collect();
            }
        };

        let mut paths: HashMap<String, String> = HashMap::new();
        let mut collected = Vec::with_capacity(shares.len());

        for record in shares {
            let object = match paths.get(&record.file_id) {
                Some(path) => path.clone(),
                None => {
                    let path = resolve_path(root.as_ref(), &owner, &record.file_id).await;
                    paths.insert(record.file_id.clone(), path.clone());
                    path
                }
            };
            collected.push(to_raw(record, object));
        }

        debug!(owner = %owner, shares = collected.len(), files = paths.len(), "Collected file shares");
        collected
    }
}

/// Group records by initiator, keeping the order in which owners first appear.
fn group_by_initiator(
    records: impl Iterator<Item = FileShareRecord>,
) -> Vec<(String, Vec<FileShareRecord>)> {
    let mut groups: Vec<(String, Vec<FileShareRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.initiator) {
            Some(&idx) => groups[idx].1.push(record),
            None => {
                index.insert(record.initiator.clone(), groups.len());
                groups.push((record.initiator.clone(), vec![record]));
            }
        }
    }

    groups
}

/// First path of `file_id` below `root`; empty when missing or unreadable.
async fn resolve_path(root: &dyn Folder, owner: &str, file_id: &str) -> String {
    match root.resolve_by_id(file_id).await {
        Ok(refs) => refs.into_iter().next().map(|r| r.path).unwrap_or_default(),
        Err(e) => {
            warn!(owner = %owner, file_id = %file_id, error = %e, "File lookup failed");
            String::new()
        }
    }
}

fn to_raw(record: FileShareRecord, object: String) -> RawShare {
    RawShare {
        action: record.full_id(),
        recipient: record.recipient(),
        app: FILES_NAMESPACE.to_string(),
        id: record.id,
        share_type: record.share_type,
        object,
        initiator: record.initiator,
        permissions: record.permissions,
        has_password: record.has_password,
        expiration: record.expiration,
        time: record.time,
    }
}
