//! Wiring of the review service over the fixture store.

use std::sync::Arc;

use sharereview_cache::{DisplayNameCache, NameResolvers};
use sharereview_core::config::AppConfig;
use sharereview_core::result::AppResult;
use sharereview_core::types::ResolverKind;
use sharereview_plugin::SourceRegistry;
use sharereview_service::{
    AppShareAggregator, DeletionRouter, FileShareCollector, ReviewPipeline, ReviewService,
};
use sharereview_store::{FilePreferenceStore, FixtureStore};

/// Build the review service described by `config`.
pub async fn build_service(config: &AppConfig) -> AppResult<ReviewService> {
    tracing::info!("Loading fixture from '{}'", config.review.fixture_path);
    let store = FixtureStore::load(&config.review.fixture_path).await?;
    let preferences = Arc::new(FilePreferenceStore::open(&config.review.preferences_path).await?);

    let registry = Arc::new(SourceRegistry::new(store.source_factories.clone()));

    let resolvers = NameResolvers::new()
        .with(ResolverKind::User, store.users.clone())
        .with(ResolverKind::Group, store.groups.clone())
        .with(ResolverKind::Room, store.rooms.clone())
        .with(ResolverKind::Board, store.boards.clone())
        .with(ResolverKind::Circle, store.circles.clone());

    let pipeline = ReviewPipeline::new(
        FileShareCollector::new(store.shares.clone(), store.folders.clone()),
        AppShareAggregator::new(registry.clone()),
        DisplayNameCache::new(&config.cache, resolvers),
        config.review.include_room_shares,
    );
    let router = DeletionRouter::new(store.shares.clone(), registry);

    Ok(ReviewService::new(
        Arc::new(pipeline),
        Arc::new(router),
        preferences,
        store.restriction.clone(),
        config.review.include_room_shares,
    ))
}
