//! Router-level integration tests
//!
//! Unknown paths, static file fallback, security headers and response layers.

use axum::http::StatusCode;
use serde_json::json;

use plancraft::backend::routes::router::SECURITY_HEADERS;

use crate::assert_message;
use crate::common::TestApp;

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/nope").await;
    assert_message!(response, StatusCode::NOT_FOUND, "Not Found");
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_unknown_path_with_other_method_is_json_404() {
    let app = TestApp::new().await;

    let response = app.server.post("/api/nope").json(&json!({})).await;
    assert_message!(response, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_missing_static_file_is_json_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/assets/missing-bundle.js").await;
    assert_message!(response, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_gated_routes_reject_anonymous_requests() {
    let app = TestApp::new().await;
    let id = uuid::Uuid::new_v4();

    let responses = [
        app.server.get("/api/todos").await,
        app.server.post("/api/todos").json(&json!({ "text": "x" })).await,
        app.server
            .post("/api/todos/reorder")
            .json(&json!({ "items": [] }))
            .await,
        app.server
            .put(&format!("/api/todos/{}", id))
            .json(&json!({ "text": "x" }))
            .await,
        app.server.delete(&format!("/api/todos/{}", id)).await,
    ];

    for response in responses {
        assert_message!(response, StatusCode::UNAUTHORIZED, "Unauthorized");
    }
}

#[tokio::test]
async fn test_responses_carry_security_headers() {
    let app = TestApp::new().await;

    let responses = [
        app.server.get("/api/todos").await,
        app.server.get("/api/nope").await,
        app.server
            .post("/api/auth/login")
            .json(&json!({ "email": "nobody@x.com", "password": "nope" }))
            .await,
    ];

    for response in responses {
        for (name, value) in SECURITY_HEADERS {
            assert_eq!(response.header(name).to_str().unwrap(), value, "header {}", name);
        }
        assert!(response.headers().get("content-security-policy").is_none());
    }
}
