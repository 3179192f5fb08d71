//! End-to-end tests for the /notes API.
//!
//! Each test starts the full application (router plus middleware) on an
//! ephemeral port, backed by a private in-memory SQLite database, and talks
//! to it over HTTP with reqwest.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use notes_server::{AppState, ServerConfig, app::build_app};
use notes_store::Store;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create(&self, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url("/notes"))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    async fn put_raw(&self, path: &str, body: &'static str) -> (StatusCode, Value) {
        let response = self
            .client
            .put(self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.delete(self.url(path)).send().await.unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    async fn count(&self) -> usize {
        let (status, body) = self.get("/notes").await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().unwrap().len()
    }
}

async fn start_server() -> TestApp {
    let store = Store::in_memory().await.unwrap();
    let state = AppState::new(Arc::new(store), ServerConfig::default());
    let app = build_app(state);

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    TestApp {
        base_url: format!("http://{}", addr),
        client: Client::new(),
    }
}

#[tokio::test]
async fn shopping_note_lifecycle() {
    let app = start_server().await;

    let (status, body) = app
        .create(json!({"title": "Shopping", "content": "Milk, eggs"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"note_id": 1, "message": "Note created."}));

    let (status, body) = app.get("/notes/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "title": "Shopping", "content": "Milk, eggs"})
    );

    let (status, body) = app
        .put_raw(
            "/notes/1",
            r#"{"title": "Shopping", "content": "Milk, eggs, bread"}"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "title": "Shopping", "content": "Milk, eggs, bread"})
    );

    let (status, body) = app.delete("/notes/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Note deleted"}));

    let (status, body) = app.get("/notes/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Note not found"}));

    let (status, body) = app.delete("/notes/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Note not found"}));
}

#[tokio::test]
async fn list_grows_with_each_create() {
    let app = start_server().await;
    assert_eq!(app.count().await, 0);

    for i in 0..5 {
        let (status, _) = app
            .create(json!({"title": format!("note {}", i), "content": ""}))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.get("/notes").await;
    let notes = body.as_array().unwrap();
    assert_eq!(notes.len(), 5);
    for note in notes {
        let keys: Vec<&str> = note.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert!(note.get("id").is_some());
        assert!(note.get("title").is_some());
        assert!(note.get("content").is_some());
    }
}

#[tokio::test]
async fn invalid_create_is_rejected_without_side_effects() {
    let app = start_server().await;

    for bad in [
        json!({"title": "No content"}),
        json!({"content": "No title"}),
        json!({"title": 1, "content": "x"}),
        json!({"title": "x", "content": null}),
        json!({"title": "", "content": "x"}),
        json!(["title", "content"]),
    ] {
        let (status, body) = app.create(bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid data"}));
    }

    let response = app
        .client
        .post(app.url("/notes"))
        .body("title=x&content=y")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.count().await, 0);
}

#[tokio::test]
async fn non_integer_ids_are_bad_requests() {
    let app = start_server().await;

    for path in ["/notes/abc", "/notes/1.5", "/notes/0", "/notes/-4"] {
        let (status, body) = app.get(path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "GET {}", path);
        assert_eq!(body, json!({"error": "Invalid note ID"}));

        let (status, body) = app.delete(path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "DELETE {}", path);
        assert_eq!(body, json!({"error": "Invalid note ID"}));

        let (status, _) = app.put_raw(path, r#"{"title": "t", "content": "c"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "PUT {}", path);
    }
}

#[tokio::test]
async fn update_reports_missing_note_before_bad_payload() {
    let app = start_server().await;

    let (status, body) = app.put_raw("/notes/42", "not json at all").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Note not found"}));

    app.create(json!({"title": "Keep", "content": "me"})).await;

    let (status, body) = app.put_raw("/notes/1", r#"{"title": "Only"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid data"}));

    let (_, body) = app.get("/notes/1").await;
    assert_eq!(body, json!({"id": 1, "title": "Keep", "content": "me"}));
}

#[tokio::test]
async fn update_twice_matches_update_once() {
    let app = start_server().await;
    app.create(json!({"title": "a", "content": "b"})).await;

    let payload = r#"{"title": "same", "content": "result"}"#;
    let (_, first) = app.put_raw("/notes/1", payload).await;
    let (_, second) = app.put_raw("/notes/1", payload).await;
    assert_eq!(first, second);

    let (_, stored) = app.get("/notes/1").await;
    assert_eq!(stored, second);
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let app = start_server().await;
    app.create(json!({"title": "one", "content": ""})).await;
    app.create(json!({"title": "two", "content": ""})).await;
    app.delete("/notes/2").await;

    let (_, body) = app.create(json!({"title": "three", "content": ""})).await;
    assert_eq!(body["note_id"], json!(3));
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let app = start_server().await;
    let mut tasks = tokio::task::JoinSet::new();

    for i in 0..20 {
        let client = app.client.clone();
        let url = app.url("/notes");
        tasks.spawn(async move {
            let response = client
                .post(url)
                .json(&json!({"title": format!("n{}", i), "content": "c"}))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body: Value = response.json().await.unwrap();
            body["note_id"].as_i64().unwrap()
        });
    }

    let mut ids = tasks.join_all().await;
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert_eq!(app.count().await, 20);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = start_server().await;

    let response = app.client.get(app.url("/notes")).send().await.unwrap();
    assert!(response.headers().get("x-request-id").is_some());

    let response = app
        .client
        .get(app.url("/health"))
        .header("x-request-id", "caller-chosen-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "caller-chosen-id"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok", "notes": 0}));
}
