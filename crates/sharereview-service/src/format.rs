//! Formatting of raw shares into review feed entries.

use chrono::{DateTime, SecondsFormat};

use sharereview_cache::DisplayNameCache;
use sharereview_core::error::AppError;
use sharereview_core::result::AppResult;
use sharereview_core::types::{FormattedShare, RawShare, ShareType};

use crate::action::ActionEncoder;

/// Render a unix timestamp as ISO-8601 with an explicit `+00:00` offset.
pub fn iso8601(timestamp: i64) -> AppResult<String> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false))
        .ok_or_else(|| AppError::validation(format!("Timestamp {timestamp} is out of range")))
}

/// Format one share, resolving initiator and recipient names through `names`.
///
/// Fails only when the share cannot be represented (timestamps out of range).
pub async fn format_share(share: &RawShare, names: &DisplayNameCache) -> AppResult<FormattedShare> {
    let time = iso8601(share.time)?;
    let expiration = share.expiration.map(iso8601).transpose()?.unwrap_or_default();

    let initiator = names.resolve(ShareType::User, &share.initiator).await;
    let recipient = names.resolve(share.share_type, &share.recipient).await;
    let password = if share.has_password { "1" } else { "" };

    Ok(FormattedShare {
        app: share.app.clone(),
        object: share.object.clone(),
        initiator,
        share_type: format!("{};{}", share.share_type.code(), recipient),
        permissions: format!("{};{};{}", share.permissions, password, expiration),
        time,
        action: ActionEncoder::encode(&share.app, &share.action),
    })
}
