//! Integration tests for reading the review feed.

mod helpers;

use sharereview_core::error::ErrorKind;
use sharereview_core::traits::PreferenceStore;

use helpers::{TestApp, app_share, file_share, standard_fixture};

#[tokio::test]
async fn test_full_feed_is_uniformly_formatted() {
    let app = TestApp::new(standard_fixture());
    let feed = app.service.read(&app.ctx("admin"), false).await.unwrap();

    let actions: Vec<&str> = feed.iter().map(|f| f.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "files_ocinternal%3A1",
            "files_ocinternal%3A2",
            "files_ocinternal%3A3",
            "deck_board%3A1",
        ]
    );

    let user_share = &feed[0];
    assert_eq!(user_share.app, "files");
    assert_eq!(user_share.object, "/Documents/plan.odt");
    assert_eq!(user_share.initiator, "Alice Liddell");
    assert_eq!(user_share.share_type, "0;Bob Builder");
    assert_eq!(user_share.permissions, "19;;");
    assert_eq!(user_share.time, "1970-01-01T00:01:40+00:00");

    assert_eq!(feed[1].share_type, "1;Staff");
    assert_eq!(feed[2].share_type, "3;t0k3n");
    assert_eq!(feed[2].object, "/Photos");

    let board = &feed[3];
    assert_eq!(board.app, "deck");
    assert_eq!(board.object, "Item board:1");
    assert_eq!(board.initiator, "Dave Lister");
    assert_eq!(board.share_type, "12;Roadmap");
}

#[tokio::test]
async fn test_only_new_after_watermark() {
    let app = TestApp::new(serde_json::json!({
        "file_shares": [
            file_share("1", 0, "alice", "bob", "100", 100),
            file_share("2", 0, "alice", "bob", "100", 200),
            file_share("3", 0, "alice", "bob", "100", 300),
        ],
        "folders": { "alice": { "files": { "100": ["/a.txt"] } } }
    }));
    let ctx = app.ctx("alice");

    assert_eq!(app.service.confirm(&ctx, Some("150")).await.unwrap(), 150);

    let feed = app.service.read(&ctx, true).await.unwrap();
    let times: Vec<&str> = feed.iter().map(|f| f.time.as_str()).collect();
    assert_eq!(
        times,
        vec!["1970-01-01T00:03:20+00:00", "1970-01-01T00:05:00+00:00"]
    );

    let everything = app.service.read(&ctx, false).await.unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn test_watermark_is_per_user() {
    let app = TestApp::new(standard_fixture());

    app.service.confirm(&app.ctx("alice"), Some("1000")).await.unwrap();

    assert!(app.service.read(&app.ctx("alice"), true).await.unwrap().is_empty());
    assert_eq!(app.service.read(&app.ctx("bob"), true).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_show_talk_includes_room_shares() {
    let app = TestApp::new(standard_fixture());
    let ctx = app.ctx("admin");

    assert!(app.service.set_show_talk(&ctx, true).await.unwrap());

    let feed = app.service.read(&ctx, false).await.unwrap();
    let room = feed
        .iter()
        .find(|f| f.action == "files_ocRoomShare%3A4")
        .expect("room share missing");
    assert_eq!(room.share_type, "10;Weekly sync");
    assert_eq!(room.object, "/Talk/notes.md");

    app.service.set_show_talk(&ctx, false).await.unwrap();
    let feed = app.service.read(&ctx, false).await.unwrap();
    assert!(feed.iter().all(|f| f.action != "files_ocRoomShare%3A4"));
}

#[tokio::test]
async fn test_confirm_defaults_to_now() {
    let app = TestApp::new(standard_fixture());
    let before = chrono::Utc::now().timestamp();

    let stored = app.service.confirm(&app.ctx("alice"), None).await.unwrap();
    assert!(stored >= before);

    let watermark = app.service.watermark(&app.ctx("alice")).await.unwrap();
    assert_eq!(watermark.timestamp(), stored);
}

#[tokio::test]
async fn test_confirm_rejects_non_numeric_timestamp() {
    let app = TestApp::new(standard_fixture());
    let err = app
        .service
        .confirm(&app.ctx("alice"), Some("yesterday"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_is_secured_reflects_restriction() {
    let open = TestApp::new(standard_fixture());
    assert!(!open.service.is_secured().await.unwrap());

    let mut fixture = standard_fixture();
    fixture["restricted_groups"] = serde_json::json!(["admin"]);
    let restricted = TestApp::new(fixture);
    assert!(restricted.service.is_secured().await.unwrap());
}

#[tokio::test]
async fn test_broken_owner_keeps_entries() {
    let app = TestApp::new(serde_json::json!({
        "file_shares": [
            file_share("1", 0, "ghost", "bob", "100", 100),
            file_share("2", 0, "alice", "bob", "100", 200),
        ],
        "folders": { "alice": { "files": { "100": ["/a.txt"] } } },
        "names": { "users": { "alice": "Alice Liddell" } }
    }));

    let feed = app.service.read(&app.ctx("admin"), false).await.unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].object, "Invalid share");
    assert_eq!(feed[0].initiator, "ghost");
    assert_eq!(feed[1].object, "/a.txt");
    assert_eq!(feed[1].initiator, "Alice Liddell");
}

#[tokio::test]
async fn test_misbehaving_sources_do_not_break_feed() {
    let app = TestApp::new(serde_json::json!({
        "sources": [
            { "name": "polls", "broken": true },
            { "name": "forms", "failing": true, "shares": [ app_share("f1", 0, "alice", "bob", 100) ] },
            { "name": "deck", "shares": [ app_share("board:1", 12, "dave", "board-1", 400) ] }
        ]
    }));

    let feed = app.service.read(&app.ctx("admin"), false).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].action, "deck_board%3A1");
    assert_eq!(app.registry.sources().await.names(), vec!["forms", "deck"]);
}

#[tokio::test]
async fn test_unreadable_watermark_reads_full_feed() {
    let app = TestApp::new(standard_fixture());
    let ctx = app.ctx("alice");
    app.preferences
        .set("alice", "review_timestamp", "not-a-number")
        .await
        .unwrap();

    let feed = app.service.read(&ctx, true).await.unwrap();
    assert_eq!(feed.len(), 4);
    assert!(app.service.watermark(&ctx).await.is_err());
}

#[tokio::test]
async fn test_source_with_unroutable_name_is_left_out() {
    let app = TestApp::new(serde_json::json!({
        "sources": [
            { "name": "group_folders", "shares": [ app_share("gf1", 1, "alice", "staff", 100) ] },
            { "name": "files", "shares": [ app_share("f1", 0, "alice", "bob", 100) ] },
            { "name": "deck", "shares": [ app_share("board:1", 12, "dave", "board-1", 400) ] }
        ]
    }));

    let feed = app.service.read(&app.ctx("admin"), false).await.unwrap();
    let actions: Vec<&str> = feed.iter().map(|f| f.action.as_str()).collect();
    assert_eq!(actions, vec!["deck_board%3A1"]);
}
