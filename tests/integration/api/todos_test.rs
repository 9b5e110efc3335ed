//! Task API integration tests
//!
//! Tests for the `/api/todos` endpoints: creation defaults, ordering, partial
//! updates, owner isolation and bulk reorder.

use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::assert_message;
use crate::common::{signup_unique_user, signup_user, TestApp};

async fn create_task(server: &TestServer, cookie: &Cookie<'static>, body: Value) -> Value {
    let response = server
        .post("/api/todos")
        .add_cookie(cookie.clone())
        .json(&body)
        .await;
    assert_eq!(
        response.status_code(),
        StatusCode::CREATED,
        "create failed: {}",
        response.text()
    );
    response.json()
}

async fn list_tasks(server: &TestServer, cookie: &Cookie<'static>) -> Vec<Value> {
    let response = server.get("/api/todos").add_cookie(cookie.clone()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_list_starts_empty() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    assert!(list_tasks(&app.server, &user.cookie).await.is_empty());
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    let task = create_task(&app.server, &user.cookie, json!({ "text": "  write paper  " })).await;

    assert_eq!(task["text"], "write paper");
    assert_eq!(task["status"], "todo");
    assert_eq!(task["completed"], false);
    assert_eq!(task["order"], 0);
    assert_eq!(task["userId"], user.id.as_str());
    assert!(task.get("createdAtIso").is_none());
    assert!(task["createdAt"].as_str().is_some());
    assert!(task["updatedAt"].as_str().is_some());
}

#[tokio::test]
async fn test_create_with_explicit_fields() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    let task = create_task(
        &app.server,
        &user.cookie,
        json!({
            "text": "ship it",
            "status": "progress",
            "completed": true,
            "order": 5,
            "createdAt": "2025-03-01T09:30:00.000Z"
        }),
    )
    .await;

    assert_eq!(task["status"], "progress");
    assert_eq!(task["completed"], true);
    assert_eq!(task["order"], 5);
    assert_eq!(task["createdAtIso"], "2025-03-01T09:30:00.000Z");
}

#[tokio::test]
async fn test_create_ignores_client_owner() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;
    let other = Uuid::new_v4().to_string();

    let task = create_task(
        &app.server,
        &user.cookie,
        json!({ "text": "mine", "userId": other }),
    )
    .await;

    assert_eq!(task["userId"], user.id.as_str());
}

#[tokio::test]
async fn test_create_requires_text() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    for body in [json!({ "text": "   " }), json!({ "status": "todo" })] {
        let response = app
            .server
            .post("/api/todos")
            .add_cookie(user.cookie.clone())
            .json(&body)
            .await;
        assert_message!(response, StatusCode::BAD_REQUEST, "Text required");
    }

    assert!(list_tasks(&app.server, &user.cookie).await.is_empty());
}

#[tokio::test]
async fn test_create_for_deleted_user_is_unauthorized() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    sqlx::query("DELETE FROM users")
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app
        .server
        .post("/api/todos")
        .add_cookie(user.cookie.clone())
        .json(&json!({ "text": "orphan" }))
        .await;
    assert_message!(response, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_create_rejects_unknown_status() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    let response = app
        .server
        .post("/api/todos")
        .add_cookie(user.cookie.clone())
        .json(&json!({ "text": "x", "status": "archived" }))
        .await;
    assert_message!(response, StatusCode::BAD_REQUEST, "Invalid payload");
}

#[tokio::test]
async fn test_list_orders_by_position_then_creation() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    for (text, order) in [("c", 2), ("b", 1), ("a", 0)] {
        create_task(&app.server, &user.cookie, json!({ "text": text, "order": order })).await;
    }
    create_task(&app.server, &user.cookie, json!({ "text": "a2", "order": 0 })).await;

    let texts: Vec<String> = list_tasks(&app.server, &user.cookie)
        .await
        .iter()
        .map(|task| task["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["a", "a2", "b", "c"]);
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;
    let task = create_task(
        &app.server,
        &user.cookie,
        json!({ "text": "draft", "status": "progress", "order": 3 }),
    )
    .await;
    let id = task["id"].as_str().unwrap();

    let response = app
        .server
        .put(&format!("/api/todos/{}", id))
        .add_cookie(user.cookie.clone())
        .json(&json!({ "completed": true, "text": null }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let updated: Value = response.json();
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["text"], "draft");
    assert_eq!(updated["status"], "progress");
    assert_eq!(updated["order"], 3);
    assert_eq!(updated["createdAt"], task["createdAt"]);
}

#[tokio::test]
async fn test_update_without_json_body_is_empty_patch() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;
    let task = create_task(
        &app.server,
        &user.cookie,
        json!({ "text": "steady", "status": "done", "order": 2 }),
    )
    .await;
    let path = format!("/api/todos/{}", task["id"].as_str().unwrap());

    let no_body = app.server.put(&path).add_cookie(user.cookie.clone()).await;
    assert_eq!(no_body.status_code(), StatusCode::OK);

    let plain_text = app
        .server
        .put(&path)
        .add_cookie(user.cookie.clone())
        .text(r#"{"text":"changed"}"#)
        .await;
    assert_eq!(plain_text.status_code(), StatusCode::OK);

    for response in [no_body, plain_text] {
        let updated: Value = response.json();
        assert_eq!(updated["text"], "steady");
        assert_eq!(updated["status"], "done");
        assert_eq!(updated["order"], 2);
    }
}

#[tokio::test]
async fn test_update_trims_text() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;
    let task = create_task(&app.server, &user.cookie, json!({ "text": "draft" })).await;
    let id = task["id"].as_str().unwrap();

    let updated: Value = app
        .server
        .put(&format!("/api/todos/{}", id))
        .add_cookie(user.cookie.clone())
        .json(&json!({ "text": "  final  " }))
        .await
        .json();
    assert_eq!(updated["text"], "final");
}

#[tokio::test]
async fn test_update_rejects_blank_text_and_bad_status() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;
    let task = create_task(&app.server, &user.cookie, json!({ "text": "keep me" })).await;
    let path = format!("/api/todos/{}", task["id"].as_str().unwrap());

    let blank = app
        .server
        .put(&path)
        .add_cookie(user.cookie.clone())
        .json(&json!({ "text": "  " }))
        .await;
    assert_message!(blank, StatusCode::BAD_REQUEST, "Text required");

    let bad_status = app
        .server
        .put(&path)
        .add_cookie(user.cookie.clone())
        .json(&json!({ "status": "archived", "text": "changed" }))
        .await;
    assert_message!(bad_status, StatusCode::BAD_REQUEST, "Invalid payload");

    let tasks = list_tasks(&app.server, &user.cookie).await;
    assert_eq!(tasks[0]["text"], "keep me");
    assert_eq!(tasks[0]["status"], "todo");
}

#[tokio::test]
async fn test_update_ignores_owner_in_body() {
    let app = TestApp::new().await;
    let ada = signup_user(&app.server, "Ada", "ada@x.com", "secret1").await;
    let bob = signup_user(&app.server, "Bob", "bob@x.com", "secret2").await;
    let task = create_task(&app.server, &ada.cookie, json!({ "text": "mine" })).await;

    let updated: Value = app
        .server
        .put(&format!("/api/todos/{}", task["id"].as_str().unwrap()))
        .add_cookie(ada.cookie.clone())
        .json(&json!({ "userId": bob.id, "id": Uuid::new_v4().to_string() }))
        .await
        .json();

    assert_eq!(updated["userId"], ada.id.as_str());
    assert_eq!(updated["id"], task["id"]);
    assert!(list_tasks(&app.server, &bob.cookie).await.is_empty());
}

#[tokio::test]
async fn test_update_and_delete_unknown_ids() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    for path in [
        "/api/todos/not-a-uuid".to_string(),
        format!("/api/todos/{}", Uuid::new_v4()),
    ] {
        let update = app
            .server
            .put(&path)
            .add_cookie(user.cookie.clone())
            .json(&json!({ "text": "x" }))
            .await;
        assert_message!(update, StatusCode::NOT_FOUND, "Not found");

        let delete = app.server.delete(&path).add_cookie(user.cookie.clone()).await;
        assert_message!(delete, StatusCode::NOT_FOUND, "Not found");
    }
}

#[tokio::test]
async fn test_delete_task() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;
    let task = create_task(&app.server, &user.cookie, json!({ "text": "done soon" })).await;
    let path = format!("/api/todos/{}", task["id"].as_str().unwrap());

    let response = app.server.delete(&path).add_cookie(user.cookie.clone()).await;
    assert_message!(response, StatusCode::OK, "Deleted");
    assert!(list_tasks(&app.server, &user.cookie).await.is_empty());

    let again = app.server.delete(&path).add_cookie(user.cookie.clone()).await;
    assert_message!(again, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_other_users_tasks_are_invisible() {
    let app = TestApp::new().await;
    let ada = signup_user(&app.server, "Ada", "ada@x.com", "secret1").await;
    let bob = signup_user(&app.server, "Bob", "bob@x.com", "secret2").await;
    let task = create_task(&app.server, &ada.cookie, json!({ "text": "private" })).await;
    let path = format!("/api/todos/{}", task["id"].as_str().unwrap());

    assert!(list_tasks(&app.server, &bob.cookie).await.is_empty());

    let update = app
        .server
        .put(&path)
        .add_cookie(bob.cookie.clone())
        .json(&json!({ "text": "hijacked" }))
        .await;
    assert_message!(update, StatusCode::NOT_FOUND, "Not found");

    let delete = app.server.delete(&path).add_cookie(bob.cookie.clone()).await;
    assert_message!(delete, StatusCode::NOT_FOUND, "Not found");

    let tasks = list_tasks(&app.server, &ada.cookie).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["text"], "private");
}

#[tokio::test]
async fn test_reorder_applies_owned_items_and_skips_the_rest() {
    let app = TestApp::new().await;
    let ada = signup_user(&app.server, "Ada", "ada@x.com", "secret1").await;
    let bob = signup_user(&app.server, "Bob", "bob@x.com", "secret2").await;

    let first = create_task(&app.server, &ada.cookie, json!({ "text": "first", "order": 0 })).await;
    let second = create_task(&app.server, &ada.cookie, json!({ "text": "second", "order": 1 })).await;
    let foreign = create_task(&app.server, &bob.cookie, json!({ "text": "bob's", "order": 0 })).await;

    let response = app
        .server
        .post("/api/todos/reorder")
        .add_cookie(ada.cookie.clone())
        .json(&json!({
            "items": [
                { "id": first["id"], "status": "done", "order": 1 },
                { "id": second["id"], "status": "progress", "order": 0 },
                { "id": foreign["id"], "status": "done", "order": 9 },
                { "id": "not-a-uuid", "status": "done", "order": 0 },
                { "id": Uuid::new_v4().to_string(), "status": "done", "order": 0 }
            ]
        }))
        .await;
    assert_message!(response, StatusCode::OK, "Reordered");

    let tasks = list_tasks(&app.server, &ada.cookie).await;
    assert_eq!(tasks[0]["text"], "second");
    assert_eq!(tasks[0]["status"], "progress");
    assert_eq!(tasks[1]["text"], "first");
    assert_eq!(tasks[1]["status"], "done");
    assert_eq!(tasks[1]["order"], 1);

    let bobs = list_tasks(&app.server, &bob.cookie).await;
    assert_eq!(bobs[0]["status"], "todo");
    assert_eq!(bobs[0]["order"], 0);
}

#[tokio::test]
async fn test_reorder_is_idempotent() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;
    let task = create_task(&app.server, &user.cookie, json!({ "text": "twice" })).await;
    let body = json!({ "items": [{ "id": task["id"], "status": "done", "order": 4 }] });

    for _ in 0..2 {
        let response = app
            .server
            .post("/api/todos/reorder")
            .add_cookie(user.cookie.clone())
            .json(&body)
            .await;
        assert_message!(response, StatusCode::OK, "Reordered");
    }

    let tasks = list_tasks(&app.server, &user.cookie).await;
    assert_eq!(tasks[0]["status"], "done");
    assert_eq!(tasks[0]["order"], 4);
}

#[tokio::test]
async fn test_reorder_rejects_malformed_batches_without_writing() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;
    let task = create_task(&app.server, &user.cookie, json!({ "text": "stay" })).await;

    let bodies = [
        json!({ "items": "not an array" }),
        json!({}),
        json!({ "items": [
            { "id": task["id"], "status": "done", "order": 3 },
            { "id": task["id"], "status": "archived", "order": 0 }
        ] }),
        json!({ "items": [{ "id": task["id"], "status": "done", "order": "first" }] }),
        json!({ "items": [{ "id": 7, "status": "done", "order": 0 }] }),
    ];

    for body in bodies {
        let response = app
            .server
            .post("/api/todos/reorder")
            .add_cookie(user.cookie.clone())
            .json(&body)
            .await;
        assert_message!(response, StatusCode::BAD_REQUEST, "Invalid payload");
    }

    let tasks = list_tasks(&app.server, &user.cookie).await;
    assert_eq!(tasks[0]["status"], "todo");
    assert_eq!(tasks[0]["order"], 0);
}

#[tokio::test]
async fn test_empty_reorder_batch_is_accepted() {
    let app = TestApp::new().await;
    let user = signup_unique_user(&app.server).await;

    let response = app
        .server
        .post("/api/todos/reorder")
        .add_cookie(user.cookie.clone())
        .json(&json!({ "items": [] }))
        .await;
    assert_message!(response, StatusCode::OK, "Reordered");
}
