//! Integration tests for todo CRUD.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use todo_database::TodoStore;

#[tokio::test]
async fn test_create_todo() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("u1");

    let response = app
        .request(
            "POST",
            "/api/todos",
            Some(json!({ "name": "Buy milk", "dueDate": "2024-01-01" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let item = &response.body["item"];
    assert_eq!(item["userId"], "u1");
    assert_eq!(item["name"], "Buy milk");
    assert_eq!(item["dueDate"], "2024-01-01");
    assert_eq!(item["done"], false);
    assert!(item["todoId"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(item["createdAt"].is_string());
    assert!(item.get("attachmentUrl").is_none());

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(
        response.header("access-control-allow-credentials"),
        Some("true")
    );
}

#[tokio::test]
async fn test_list_todos_is_scoped_to_caller() {
    let app = helpers::TestApp::new();
    let alice = helpers::token_for("alice");
    let bob = helpers::token_for("bob");

    let first = app.create_todo(&alice, "Buy milk").await;
    let second = app.create_todo(&alice, "Walk dog").await;
    app.create_todo(&bob, "Bob's chore").await;

    let response = app.request("GET", "/api/todos", None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert!(
        response
            .header("access-control-allow-credentials")
            .is_none()
    );

    let items = response.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let mut ids: Vec<&str> = items.iter().map(|i| i["todoId"].as_str().unwrap()).collect();
    ids.sort();
    let mut expected = vec![first.as_str(), second.as_str()];
    expected.sort();
    assert_eq!(ids, expected);
    assert!(items.iter().all(|i| i["userId"] == "alice"));
}

#[tokio::test]
async fn test_list_todos_empty() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("nobody");

    let response = app.request("GET", "/api/todos", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "items": [] }));
}

#[tokio::test]
async fn test_update_todo() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("u1");
    let todo_id = app.create_todo(&token, "Buy milk").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/todos/{todo_id}"),
            Some(json!({ "name": "Buy oat milk", "dueDate": "2024-02-01", "done": true })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({}));
    assert_eq!(
        response.header("access-control-allow-credentials"),
        Some("true")
    );

    let stored = app.store.find_by_id(&todo_id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Buy oat milk");
    assert_eq!(stored.due_date.as_deref(), Some("2024-02-01"));
    assert!(stored.done);
    assert_eq!(stored.user_id, "u1");
}

#[tokio::test]
async fn test_update_missing_todo_is_noop() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("u1");

    let response = app
        .request(
            "PATCH",
            "/api/todos/does-not-exist",
            Some(json!({ "name": "ghost", "done": false })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_update_with_malformed_body_is_rejected() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("u1");
    let todo_id = app.create_todo(&token, "Buy milk").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/todos/{todo_id}"),
            Some(json!({ "title": "wrong field" })),
            Some(&token),
        )
        .await;

    assert!(response.status.is_client_error());
    let stored = app.store.find_by_id(&todo_id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Buy milk");
}

#[tokio::test]
async fn test_delete_todo_is_idempotent() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("u1");
    let todo_id = app.create_todo(&token, "Buy milk").await;

    for _ in 0..2 {
        let response = app
            .request(
                "DELETE",
                &format!("/api/todos/{todo_id}"),
                None,
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({}));
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    }

    let response = app.request("GET", "/api/todos", None, Some(&token)).await;
    assert_eq!(response.body["items"], json!([]));
}

#[tokio::test]
async fn test_foreign_item_update_allowed_by_default() {
    let app = helpers::TestApp::new();
    let owner = helpers::token_for("owner");
    let other = helpers::token_for("other");
    let todo_id = app.create_todo(&owner, "Private").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/todos/{todo_id}"),
            Some(json!({ "name": "Changed", "done": true })),
            Some(&other),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stored = app.store.find_by_id(&todo_id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Changed");
    assert_eq!(stored.user_id, "owner");
}

#[tokio::test]
async fn test_foreign_item_access_forbidden_when_enforced() {
    let app = helpers::TestApp::with_ownership_enforced();
    let owner = helpers::token_for("owner");
    let other = helpers::token_for("other");
    let todo_id = app.create_todo(&owner, "Private").await;

    let update = app
        .request(
            "PATCH",
            &format!("/api/todos/{todo_id}"),
            Some(json!({ "name": "Changed", "done": true })),
            Some(&other),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);
    assert_eq!(update.body["error"], "FORBIDDEN");

    let delete = app
        .request(
            "DELETE",
            &format!("/api/todos/{todo_id}"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let stored = app.store.find_by_id(&todo_id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Private");

    let own = app
        .request(
            "DELETE",
            &format!("/api/todos/{todo_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}
