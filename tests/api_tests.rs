//! API integration tests
//!
//! Each test spawns the full router on an ephemeral port with its own
//! freshly seeded inventory, then drives it over HTTP with reqwest.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};

use bookstore_server::{
    api,
    config::AppConfig,
    models::{book::demo_catalog, Book},
    repository::Repository,
    services::Services,
    AppState,
};

/// Spawn the server on an ephemeral port and return its base URL
async fn spawn_app(books: Vec<Book>) -> String {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Repository::with_books(books))),
    };

    let app = api::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

fn book(id: &str, quantity: u32) -> Book {
    Book {
        id: id.to_string(),
        title: format!("Title {}", id),
        author: format!("Author {}", id),
        quantity,
    }
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app(Vec::new()).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_books() {
    let base = spawn_app(demo_catalog()).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected a JSON array");
    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["id"], "1");
    assert_eq!(books[0]["quantity"], 2);
}

#[tokio::test]
async fn test_add_book() {
    let base = spawn_app(demo_catalog()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "id": "4",
            "title": "X",
            "author": "Y",
            "quantity": 5
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected a JSON array");
    assert_eq!(books.len(), 4);
    assert_eq!(books[3]["id"], "4");

    // The new record is retrievable by id
    let response = client
        .get(format!("{}/books/4", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "X");
    assert_eq!(body["author"], "Y");
    assert_eq!(body["quantity"], 5);
}

#[tokio::test]
async fn test_add_book_malformed_body() {
    let base = spawn_app(Vec::new()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_get_book_not_found() {
    let base = spawn_app(demo_catalog()).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books/99", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "book not found");
}

#[tokio::test]
async fn test_checkout_until_exhausted() {
    let base = spawn_app(vec![book("1", 2)]).await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/checkout?id=1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 1);

    let response = client
        .patch(format!("{}/checkout?id=1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 0);

    let response = client
        .patch(format!("{}/checkout?id=1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "book not available");
}

#[tokio::test]
async fn test_checkout_unknown_book() {
    let base = spawn_app(demo_catalog()).await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/checkout?id=99", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "book not found");
}

#[tokio::test]
async fn test_checkout_missing_id() {
    let base = spawn_app(demo_catalog()).await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/checkout", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "missing id query parameter");
}

#[tokio::test]
async fn test_return_book() {
    let base = spawn_app(vec![book("1", 0)]).await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/return?id=1", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "book returned successfully");

    // Quantity went from 0 to 1
    let response = client
        .get(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 1);
}

#[tokio::test]
async fn test_return_unknown_book_is_bad_request() {
    let base = spawn_app(Vec::new()).await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/return?id=1", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "book not found");
}

#[tokio::test]
async fn test_return_missing_id() {
    let base = spawn_app(Vec::new()).await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/return", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "missing id query parameter");
}
