use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use postboard_core::StoreError;
use postboard_core::domain::StoreSnapshot;
use postboard_core::ports::SnapshotStore;
use postboard_infra::{IdPolicy, InMemorySnapshotStore, ResourceStore};

use super::configure_routes;
use crate::state::AppState;

async fn test_state() -> (AppState, Arc<InMemorySnapshotStore>) {
    let gateway = Arc::new(InMemorySnapshotStore::new());
    let store = ResourceStore::open(gateway.clone(), IdPolicy::default())
        .await
        .unwrap();
    (AppState::from_store(Arc::new(store)), gateway)
}

/// Gateway that loads an empty store and refuses every save.
struct FailingSnapshotStore;

#[async_trait]
impl SnapshotStore for FailingSnapshotStore {
    async fn load(&self) -> Result<StoreSnapshot, StoreError> {
        Ok(StoreSnapshot::default())
    }

    async fn save(&self, _snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        Err(StoreError::Io("disk full".to_string()))
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_create_and_update_post() {
    let (state, gateway) = test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "t1", "author": "a1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"ID": 1, "Title": "t1", "Author": "a1"}));

    let req = test::TestRequest::put()
        .uri("/posts/1")
        .set_json(json!({"title": "t2", "author": "a2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"ID": 1, "Title": "t2", "Author": "a2"}));

    let persisted = gateway.current().await;
    assert_eq!(persisted.posts.len(), 1);
    assert_eq!(persisted.posts[0].title, "t2");
}

#[actix_web::test]
async fn test_missing_records_answer_empty_object() {
    let (state, gateway) = test_state().await;
    let app = init_app!(state);

    for uri in ["/posts/7", "/comments/7", "/profile"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({}), "{}", uri);
    }

    let req = test::TestRequest::put()
        .uri("/comments/7")
        .set_json(json!({"body": "b", "postID": 1}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({}));
    assert_eq!(gateway.save_count(), 0);
}

#[actix_web::test]
async fn test_delete_comments_by_post_is_not_allowed() {
    let (state, _) = test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri("/comments/post/5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 405);
    assert_eq!(body["instance"], "/comments/post/5");

    let req = test::TestRequest::delete().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn test_comment_is_listed_under_its_post() {
    let (state, _) = test_state().await;
    let app = init_app!(state);

    // The referenced post does not exist, which is allowed.
    let req = test::TestRequest::post()
        .uri("/comments")
        .set_json(json!({"body": "first!", "postID": 7}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created, json!({"ID": 1, "Body": "first!", "PostID": 7}));

    let req = test::TestRequest::post()
        .uri("/comments")
        .set_json(json!({"body": "elsewhere", "postID": 8}))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let expected = json!([created]);
    for uri in ["/posts/7/comments", "/comments/post/7"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, expected, "{}", uri);
    }
}

#[actix_web::test]
async fn test_negative_post_id_is_accepted() {
    let (state, _) = test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/comments")
        .set_json(json!({"body": "orphan", "postID": -1}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created, json!({"ID": 1, "Body": "orphan", "PostID": -1}));

    let req = test::TestRequest::get().uri("/comments/post/-1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([created]));
}

#[actix_web::test]
async fn test_failed_save_returns_500_and_keeps_record() {
    let store = ResourceStore::open(Arc::new(FailingSnapshotStore), IdPolicy::default())
        .await
        .unwrap();
    let app = init_app!(AppState::from_store(Arc::new(store)));

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({"title": "t", "author": "a"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["title"], "Internal Server Error");
    assert!(body.get("detail").is_none_or(Value::is_null));
    assert!(!body.to_string().contains("disk full"));

    // Last write wins: the mutation stays in memory.
    let req = test::TestRequest::get().uri("/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([{"ID": 1, "Title": "t", "Author": "a"}]));
}

#[actix_web::test]
async fn test_delete_returns_remaining_collection() {
    let (state, _) = test_state().await;
    let app = init_app!(state);

    for (title, author) in [("t1", "alice"), ("t2", "bob"), ("t3", "alice")] {
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": title, "author": author}))
            .to_request();
        let _: Value = test::call_and_read_body_json(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/posts/author/alice")
        .to_request();
    let by_author: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_author.as_array().unwrap().len(), 2);

    let req = test::TestRequest::delete().uri("/posts/1").to_request();
    let remaining: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        remaining,
        json!([
            {"ID": 2, "Title": "t2", "Author": "bob"},
            {"ID": 3, "Title": "t3", "Author": "alice"}
        ])
    );

    let req = test::TestRequest::get().uri("/posts/1").to_request();
    let gone: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(gone, json!({}));

    // Deleting an unknown id still answers with the collection.
    let req = test::TestRequest::delete().uri("/posts/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_profile_lifecycle() {
    let (state, gateway) = test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/profile")
        .set_json(json!({"name": "Ann"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created, json!({"name": "Ann"}));

    let req = test::TestRequest::put()
        .uri("/profile")
        .set_json(json!({"name": "Bea"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated, json!({"name": "Bea"}));

    let req = test::TestRequest::get().uri("/profile").to_request();
    let current: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(current, json!({"name": "Bea"}));

    let req = test::TestRequest::delete().uri("/profile").to_request();
    let cleared: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cleared, json!({}));

    assert_eq!(gateway.current().await, StoreSnapshot::default());
}

#[actix_web::test]
async fn test_malformed_bodies_are_rejected() {
    let (state, gateway) = test_state().await;
    let app = init_app!(state);

    let cases = [
        ("/posts", json!({"title": "only a title"})),
        ("/comments", json!({"body": "b", "postID": "seven"})),
        ("/profile", json!({})),
    ];
    for (uri, payload) in cases {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Bad Request");
    }

    assert_eq!(gateway.save_count(), 0);
}

#[actix_web::test]
async fn test_non_numeric_id_is_not_routed() {
    let (state, _) = test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/posts/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_check() {
    let (state, _) = test_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
