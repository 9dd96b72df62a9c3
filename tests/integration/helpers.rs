//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;

use sharereview_cache::{DisplayNameCache, NameResolvers};
use sharereview_core::config::cache::CacheConfig;
use sharereview_core::types::ResolverKind;
use sharereview_plugin::SourceRegistry;
use sharereview_service::{
    AppShareAggregator, DeletionRouter, FileShareCollector, RequestContext, ReviewPipeline,
    ReviewService,
};
use sharereview_store::{FilePreferenceStore, Fixture, FixtureStore};

/// Test application context
pub struct TestApp {
    /// The service under test
    pub service: ReviewService,
    /// Collaborators behind the service, for direct inspection
    pub store: FixtureStore,
    /// Source registry shared by aggregation and deletion
    pub registry: Arc<SourceRegistry>,
    /// Preference store
    pub preferences: Arc<FilePreferenceStore>,
}

impl TestApp {
    /// Create a test application over a JSON fixture
    pub fn new(fixture: Value) -> Self {
        let fixture: Fixture = serde_json::from_value(fixture).expect("Invalid fixture");
        let store = FixtureStore::new(fixture);
        let preferences = Arc::new(FilePreferenceStore::in_memory());
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
            DisplayNameCache::new(&CacheConfig::default(), resolvers),
            false,
        );
        let router = DeletionRouter::new(store.shares.clone(), registry.clone());

        let service = ReviewService::new(
            Arc::new(pipeline),
            Arc::new(router),
            preferences.clone(),
            store.restriction.clone(),
            false,
        );

        Self {
            service,
            store,
            registry,
            preferences,
        }
    }

    /// Request context for `user`
    pub fn ctx(&self, user: &str) -> RequestContext {
        RequestContext::new(user)
    }
}

/// A file share record as JSON
pub fn file_share(id: &str, share_type: i32, initiator: &str, target: &str, file_id: &str, time: i64) -> Value {
    serde_json::json!({
        "id": id,
        "share_type": share_type,
        "initiator": initiator,
        "share_with": target,
        "token": "t0k3n",
        "file_id": file_id,
        "permissions": 19,
        "time": time,
    })
}

/// An app share as JSON
pub fn app_share(id: &str, share_type: i32, initiator: &str, recipient: &str, time: i64) -> Value {
    serde_json::json!({
        "id": id,
        "share_type": share_type,
        "object": format!("Item {id}"),
        "initiator": initiator,
        "recipient": recipient,
        "permissions": 1,
        "time": time,
    })
}

/// A fixture with two owners, a deck source and name tables
pub fn standard_fixture() -> Value {
    serde_json::json!({
        "file_shares": [
            file_share("1", 0, "alice", "bob", "100", 100),
            file_share("2", 1, "alice", "staff", "100", 200),
            file_share("3", 3, "carol", "", "200", 300),
            file_share("4", 10, "alice", "room-1", "101", 250),
        ],
        "folders": {
            "alice": { "files": { "100": ["/Documents/plan.odt"], "101": ["/Talk/notes.md"] } },
            "carol": { "files": { "200": ["/Photos"] } }
        },
        "names": {
            "users": { "alice": "Alice Liddell", "bob": "Bob Builder", "carol": "Carol Danvers", "dave": "Dave Lister" },
            "groups": { "staff": "Staff" },
            "rooms": { "room-1": "Weekly sync" },
            "boards": { "board-1": "Roadmap" }
        },
        "sources": [
            { "name": "deck", "shares": [ app_share("board:1", 12, "dave", "board-1", 400) ] }
        ]
    })
}
