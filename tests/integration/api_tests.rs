//! API integration tests
//!
//! Each test starts the real router on an ephemeral port, seeded with the
//! built-in sample data.

use std::sync::Arc;

use bookhive_server::{api, config::AppConfig, store::Store, AppState};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Start a server and return its API base URL
async fn spawn_app() -> String {
    let state = AppState::new(AppConfig::default(), Arc::new(Store::seed()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, api::router(state))
            .await
            .expect("Server error");
    });

    format!("http://{}", addr)
}

async fn get(url: String) -> (StatusCode, Value) {
    let response = Client::new()
        .get(url)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.expect("Failed to parse response");
    (status, body)
}

fn field<'a>(items: &'a Value, name: &str) -> Vec<&'a str> {
    items
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|item| item[name].as_str().expect("Expected a string field"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app().await;

    let (status, body) = get(format!("{}/api/v1/health", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(format!("{}/api/v1/ready", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["books"], 5);
    assert_eq!(body["shelves"], 10);
}

#[tokio::test]
async fn test_list_books() {
    let base = spawn_app().await;

    let (status, body) = get(format!("{}/api/v1/books", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&body, "title"),
        vec![
            "THE WIDOW",
            "THE SECRET OF SECRETS",
            "MURDER AT HOLLY HOUSE",
            "CAMINO GHOSTS",
            "FOURTH WING"
        ]
    );
    assert_eq!(
        body[0]["book_image"],
        "https://static01.nyt.com/bestsellers/images/9780385548984.jpg"
    );
}

#[tokio::test]
async fn test_get_book() {
    let base = spawn_app().await;

    let (status, body) = get(format!("{}/api/v1/books/9780062457936", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "FOURTH WING");
    assert_eq!(body["author"], "Rebecca Yarros");

    let (status, body) = get(format!("{}/api/v1/books/9780062457937", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book with ID '9780062457937' not found.");
}

#[tokio::test]
async fn test_search_books() {
    let base = spawn_app().await;

    let (status, body) = get(format!("{}/api/v1/books/search?query=holly", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "title"), vec!["MURDER AT HOLLY HOUSE"]);

    // Description matches count too
    let (_, body) = get(format!("{}/api/v1/books/search?query=murder", base)).await;
    assert_eq!(field(&body, "title"), vec!["THE WIDOW", "MURDER AT HOLLY HOUSE"]);

    let (_, lower) = get(format!("{}/api/v1/books/search?query=grisham", base)).await;
    let (_, upper) = get(format!("{}/api/v1/books/search?query=GRISHAM", base)).await;
    assert_eq!(lower, upper);
    assert_eq!(field(&lower, "title"), vec!["THE WIDOW", "CAMINO GHOSTS"]);

    let (status, body) =
        get(format!("{}/api/v1/books/search?query=nonexistent-xyz", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_blank_search_returns_empty_list() {
    let base = spawn_app().await;

    for query in ["", "?query=", "?query=%20%20%20"] {
        let (status, body) = get(format!("{}/api/v1/books/search{}", base, query)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Array(Vec::new()), "query {:?}", query);
    }
}

#[tokio::test]
async fn test_users() {
    let base = spawn_app().await;

    let (status, body) = get(format!("{}/api/v1/users", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, body) = get(format!("{}/api/v1/users/3906820", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["displayName"], "Vidya-BooksAreMagic");
    assert_eq!(body["location"], "Bengaluru, IN");
    assert!(body.get("email").is_none());

    let (status, body) = get(format!("{}/api/v1/users/does-not-exist", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with ID 'does-not-exist' not found.");
}

#[tokio::test]
async fn test_user_activities() {
    let base = spawn_app().await;

    let (status, body) = get(format!("{}/api/v1/users/5813019/activities", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "id"), vec!["act-1"]);
    assert_eq!(body[0]["rating"], "5");
    assert_eq!(body[0]["activityType"], "rated");
    assert_eq!(body[0]["user"]["username"], "ElizaLu");
    assert_eq!(body[0]["book"]["title"], "THE WIDOW");

    let (status, body) =
        get(format!("{}/api/v1/users/does-not-exist/activities", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with ID 'does-not-exist' not found.");
}

#[tokio::test]
async fn test_shelves() {
    let base = spawn_app().await;

    let (status, all) = get(format!("{}/api/v1/shelves", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 10);
    assert_eq!(all[3]["slug"], "young-adult");
    assert_eq!(all[6]["isCurated"], false);

    let (status, body) = get(format!("{}/api/v1/shelves/9", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "thriller");

    let (status, _) = get(format!("{}/api/v1/shelves/99", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_shelves_are_unscoped() {
    let base = spawn_app().await;

    let (_, all) = get(format!("{}/api/v1/shelves", base)).await;
    for user_id in ["5813019", "4271946"] {
        let (status, body) = get(format!("{}/api/v1/shelves/user/{}", base, user_id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, all);
    }

    let (status, body) = get(format!("{}/api/v1/shelves/user/nobody", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with ID 'nobody' not found.");
}

#[tokio::test]
async fn test_non_numeric_shelf_id_is_rejected() {
    let base = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/api/v1/shelves/abc", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_activity_feed() {
    let base = spawn_app().await;

    let (status, body) = get(format!("{}/api/v1/activities", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&body, "id"),
        vec!["act-1", "act-2", "act-3", "act-4", "act-5"]
    );
    assert!(body[3]["rating"].is_null());

    let (status, body) = get(format!("{}/api/v1/activities/act-3", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["displayName"], "Diane");

    let (status, body) = get(format!("{}/api/v1/activities/act-0", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Activity with ID 'act-0' not found.");
}

#[tokio::test]
async fn test_cors_allows_angular_client() {
    let base = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/api/v1/books", base))
        .header("Origin", "http://localhost:4200")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:4200")
    );
}

#[tokio::test]
async fn test_openapi_document() {
    let base = spawn_app().await;

    let (status, body) = get(format!("{}/api-docs/openapi.json", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/books/search"].is_object());
}
