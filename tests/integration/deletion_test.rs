//! Integration tests for deleting shares by feed action id.

mod helpers;

use sharereview_core::error::ErrorKind;

use helpers::{TestApp, app_share, standard_fixture};

#[tokio::test]
async fn test_delete_file_share_from_feed() {
    let app = TestApp::new(standard_fixture());
    let ctx = app.ctx("admin");

    let feed = app.service.read(&ctx, false).await.unwrap();
    let action = feed[0].action.clone();

    assert!(app.service.delete(&ctx, &action).await.unwrap());
    assert_eq!(app.store.shares.len().await, 3);

    let feed = app.service.read(&ctx, false).await.unwrap();
    assert!(feed.iter().all(|f| f.action != action));

    let err = app.service.delete(&ctx, &action).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_app_share_from_feed() {
    let app = TestApp::new(standard_fixture());
    let ctx = app.ctx("admin");

    assert!(app.service.delete(&ctx, "deck_board%3A1").await.unwrap());

    let feed = app.service.read(&ctx, false).await.unwrap();
    assert!(feed.iter().all(|f| f.app != "deck"));
}

#[tokio::test]
async fn test_nonexistent_file_share_is_not_found() {
    let app = TestApp::new(standard_fixture());
    let err = app
        .service
        .delete(&app.ctx("admin"), "files_ocinternal%3A9999")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_unknown_namespace_returns_false() {
    let app = TestApp::new(standard_fixture());
    assert!(!app.service.delete(&app.ctx("admin"), "polls_7").await.unwrap());
}

#[tokio::test]
async fn test_malformed_id_is_validation_error() {
    let app = TestApp::new(standard_fixture());
    let err = app
        .service
        .delete(&app.ctx("admin"), "ocinternal%3A1")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_duplicate_source_name_uses_first() {
    let app = TestApp::new(serde_json::json!({
        "sources": [
            { "name": "deck", "shares": [ app_share("board:1", 12, "dave", "board-1", 100) ] },
            { "name": "deck", "shares": [ app_share("board:2", 12, "erin", "board-2", 200) ] }
        ]
    }));
    let ctx = app.ctx("admin");

    let feed = app.service.read(&ctx, false).await.unwrap();
    let actions: Vec<&str> = feed.iter().map(|f| f.action.as_str()).collect();
    assert_eq!(actions, vec!["deck_board%3A1"]);

    assert!(!app.service.delete(&ctx, "deck_board%3A2").await.unwrap());
    assert!(app.service.delete(&ctx, "deck_board%3A1").await.unwrap());
}
