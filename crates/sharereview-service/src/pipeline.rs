//! Review pipeline: merges, filters and formats the share feed.

use tracing::{debug, info};

use sharereview_cache::DisplayNameCache;
use sharereview_core::types::{FormattedShare, RawShare, ShareType, Watermark};

use crate::collector::{AppShareAggregator, FileShareCollector};
use crate::format::format_share;

/// Builds the review feed of one session.
///
/// The pipeline owns its display-name cache, so names resolved for one
/// read are reused by the next read of the same pipeline and dropped with it.
#[derive(Debug, Clone)]
pub struct ReviewPipeline {
    files: FileShareCollector,
    apps: AppShareAggregator,
    names: DisplayNameCache,
    include_room_shares: bool,
}

impl ReviewPipeline {
    /// Creates a pipeline.
    ///
    /// `include_room_shares` is the default used by [`read`](Self::read).
    pub fn new(
        files: FileShareCollector,
        apps: AppShareAggregator,
        names: DisplayNameCache,
        include_room_shares: bool,
    ) -> Self {
        Self {
            files,
            apps,
            names,
            include_room_shares,
        }
    }

    /// Read the feed with the pipeline's room-share setting.
    pub async fn read(&self, only_new: bool, watermark: Watermark) -> Vec<FormattedShare> {
        self.read_with_rooms(only_new, watermark, self.include_room_shares)
            .await
    }

    /// Read the feed.
    ///
    /// With `only_new`, entries at or below `watermark` are left out and only
    /// the initiators of the remaining entries are pre-resolved. An entry
    /// that cannot be formatted is skipped; the read itself never fails.
    pub async fn read_with_rooms(
        &self,
        only_new: bool,
        watermark: Watermark,
        include_room_shares: bool,
    ) -> Vec<FormattedShare> {
        let mut shares = self.files.collect(include_room_shares).await;
        shares.extend(self.apps.collect().await);

        let wanted = |share: &RawShare| !only_new || watermark.admits(share.time);

        if only_new {
            self.names
                .prewarm(
                    ShareType::User,
                    shares
                        .iter()
                        .filter(|&s| wanted(s))
                        .map(|s| s.initiator.as_str()),
                )
                .await;
        }

        let mut feed = Vec::new();
        for share in shares.iter().filter(|&s| wanted(s)) {
            match format_share(share, &self.names).await {
                Ok(formatted) => feed.push(formatted),
                Err(e) => {
                    debug!(app = %share.app, share_id = %share.id, error = %e, "Skipping unformattable share");
                }
            }
        }

        info!(
            collected = shares.len(),
            returned = feed.len(),
            only_new,
            watermark = watermark.timestamp(),
            "Review feed built"
        );
        feed
    }
}
