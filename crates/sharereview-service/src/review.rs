//! Review service: the operations exposed to callers for one user.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use sharereview_core::error::AppError;
use sharereview_core::result::AppResult;
use sharereview_core::traits::{AppRestriction, PreferenceStore};
use sharereview_core::types::{FormattedShare, Watermark};

use crate::context::RequestContext;
use crate::deletion::DeletionRouter;
use crate::pipeline::ReviewPipeline;

/// Preference key of the review watermark.
pub const WATERMARK_KEY: &str = "review_timestamp";

/// Preference key of the "include room shares" toggle.
pub const SHOW_TALK_KEY: &str = "show_talk";

/// Read, delete, confirm and settings operations over the review feed.
#[derive(Clone)]
pub struct ReviewService {
    pipeline: Arc<ReviewPipeline>,
    router: Arc<DeletionRouter>,
    preferences: Arc<dyn PreferenceStore>,
    restriction: Arc<dyn AppRestriction>,
    default_show_talk: bool,
}

impl std::fmt::Debug for ReviewService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewService")
            .field("pipeline", &self.pipeline)
            .field("default_show_talk", &self.default_show_talk)
            .finish_non_exhaustive()
    }
}

impl ReviewService {
    /// Creates a review service.
    ///
    /// `default_show_talk` applies to users without a stored preference.
    pub fn new(
        pipeline: Arc<ReviewPipeline>,
        router: Arc<DeletionRouter>,
        preferences: Arc<dyn PreferenceStore>,
        restriction: Arc<dyn AppRestriction>,
        default_show_talk: bool,
    ) -> Self {
        Self {
            pipeline,
            router,
            preferences,
            restriction,
            default_show_talk,
        }
    }

    /// Read the review feed of the acting user.
    pub async fn read(&self, ctx: &RequestContext, only_new: bool) -> AppResult<Vec<FormattedShare>> {
        let watermark = match self.watermark(ctx).await {
            Ok(watermark) => watermark,
            Err(e) => {
                warn!(user_id = %ctx.user_id, error = %e, "Unusable review watermark, reading from the start");
                Watermark::default()
            }
        };
        let show_talk = self.show_talk(ctx).await?;

        Ok(self
            .pipeline
            .read_with_rooms(only_new, watermark, show_talk)
            .await)
    }

    /// Delete a share by composite id.
    pub async fn delete(&self, ctx: &RequestContext, composite_id: &str) -> AppResult<bool> {
        let deleted = self.router.delete(composite_id).await?;
        info!(user_id = %ctx.user_id, share = %composite_id, deleted, "Share deletion requested");
        Ok(deleted)
    }

    /// Confirm the review up to `timestamp` (or now) and return the stored value.
    ///
    /// The client may send the timestamp as a number or a numeric string.
    pub async fn confirm(&self, ctx: &RequestContext, timestamp: Option<&str>) -> AppResult<i64> {
        let timestamp = match timestamp.map(str::trim).filter(|t| !t.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::validation(format!("Invalid review timestamp '{raw}'")))?,
            None => Utc::now().timestamp(),
        };

        self.preferences
            .set(&ctx.user_id, WATERMARK_KEY, &timestamp.to_string())
            .await?;

        info!(user_id = %ctx.user_id, timestamp, "Review confirmed");
        Ok(timestamp)
    }

    /// Store whether room shares are shown and echo the value.
    pub async fn set_show_talk(&self, ctx: &RequestContext, show: bool) -> AppResult<bool> {
        self.preferences
            .set(&ctx.user_id, SHOW_TALK_KEY, &show.to_string())
            .await?;
        Ok(show)
    }

    /// Whether the app is restricted to specific groups.
    pub async fn is_secured(&self) -> AppResult<bool> {
        Ok(!self.restriction.restricted_groups().await?.is_empty())
    }

    /// The stored watermark of the acting user; 0 when never confirmed.
    pub async fn watermark(&self, ctx: &RequestContext) -> AppResult<Watermark> {
        let raw = self.preferences.get(&ctx.user_id, WATERMARK_KEY, "0").await?;
        raw.trim()
            .parse::<i64>()
            .map(Watermark::new)
            .map_err(|_| AppError::validation(format!("Stored review timestamp '{raw}' is not a number")))
    }

    async fn show_talk(&self, ctx: &RequestContext) -> AppResult<bool> {
        let default = self.default_show_talk.to_string();
        let raw = self.preferences.get(&ctx.user_id, SHOW_TALK_KEY, &default).await?;
        Ok(matches!(raw.trim(), "true" | "1" | "yes"))
    }
}
