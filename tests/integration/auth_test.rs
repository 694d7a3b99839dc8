//! Integration tests for bearer-token authentication and the authorizer endpoint.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/todos", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_header_without_bearer_prefix_is_unauthorized() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("u1");

    let response = app
        .request_with_header("GET", "/api/todos", None, Some(&format!("Token {token}")))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request_with_header("GET", "/api/todos", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_lowercase_bearer_is_accepted() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("u1");

    let response = app
        .request_with_header("GET", "/api/todos", None, Some(&format!("bearer {token}")))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_wrongly_signed_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let token = helpers::foreign_token_for("u1");

    let response = app
        .request(
            "POST",
            "/api/todos",
            Some(json!({ "name": "Sneaky" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let token = helpers::expired_token_for("u1");

    let response = app.request("GET", "/api/todos", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_authorizer_allows_valid_token() {
    let app = helpers::TestApp::new();
    let token = helpers::token_for("google-oauth2|1234");

    let response = app
        .request(
            "POST",
            "/api/authorize",
            Some(json!({
                "type": "TOKEN",
                "authorizationToken": format!("Bearer {token}"),
                "methodArn": "arn:aws:execute-api:us-east-1:123456789012:abc/dev/GET/todos",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "principalId": "google-oauth2|1234",
            "policyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Action": "execute-api:Invoke",
                    "Effect": "Allow",
                    "Resource": "*"
                }]
            }
        })
    );
}

#[tokio::test]
async fn test_authorizer_denies_bad_tokens_with_ok_status() {
    let app = helpers::TestApp::new();
    let foreign = helpers::foreign_token_for("u1");

    for authorization in [
        json!(format!("Bearer {foreign}")),
        json!("Basic dXNlcjpwYXNz"),
        json!(null),
    ] {
        let response = app
            .request(
                "POST",
                "/api/authorize",
                Some(json!({
                    "type": "TOKEN",
                    "authorizationToken": authorization,
                    "methodArn": "arn:aws:execute-api:us-east-1:123456789012:abc/dev/GET/todos",
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["principalId"], "user");
        assert_eq!(
            response.body["policyDocument"]["Statement"][0]["Effect"],
            "Deny"
        );
    }
}
