//! Integration tests for user endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_user_then_get_returns_same_fields() {
    let app = common::TestApp::new();

    let body = json!({
        "username": "ana.souza",
        "name": "Ana Souza",
        "age": 31,
        "weight": 64.5
    });

    let (status, response) = app.post("/users", &body, None).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: Value = serde_json::from_str(&response).unwrap();
    let id = created["user"]["id"].as_str().unwrap();

    let (status, response) = app.get(&format!("/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let fetched: Value = serde_json::from_str(&response).unwrap();
    let user = &fetched["user"];
    assert_eq!(user["id"], id);
    assert_eq!(user["username"], "ana.souza");
    assert_eq!(user["name"], "Ana Souza");
    assert_eq!(user["age"], 31);
    assert_eq!(user["weight"], 64.5);
}

#[tokio::test]
async fn test_list_users_returns_every_user() {
    let app = common::TestApp::new();

    let first = app.create_test_user().await;
    let second = app.create_test_user().await;

    let (status, response) = app.get("/users").await;
    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&response).unwrap();
    let users = response["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], first["id"]);
    assert_eq!(users[1]["id"], second["id"]);
}

#[tokio::test]
async fn test_list_users_empty() {
    let app = common::TestApp::new();

    let (status, response) = app.get("/users").await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response, json!({ "users": [] }));
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let app = common::TestApp::new();

    let (status, response) = app.get(&format!("/users/{}", uuid::Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_with_malformed_id_returns_400() {
    let app = common::TestApp::new();

    let (status, _) = app.get("/users/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_rejects_missing_fields() {
    let app = common::TestApp::new();

    let body = json!({ "username": "ana", "age": 31 });
    let (status, response) = app.post("/users", &body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_rejects_negative_age() {
    let app = common::TestApp::new();

    let body = json!({
        "username": "ana",
        "name": "Ana",
        "age": -1,
        "weight": 60.0
    });
    let (status, response) = app.post("/users", &body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("age cannot be negative"));
}

#[tokio::test]
async fn test_create_user_rejects_wrong_types() {
    let app = common::TestApp::new();

    let body = json!({
        "username": "ana",
        "name": "Ana",
        "age": "thirty",
        "weight": 60.0
    });
    let (status, _) = app.post("/users", &body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_user_round_trip_postgres() {
    let app = common::TestApp::with_postgres().await;
    app.cleanup().await;

    let user = app.create_test_user().await;
    let (status, response) = app
        .get(&format!("/users/{}", user["id"].as_str().unwrap()))
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["user"]["username"], user["username"]);

    app.cleanup().await;
}
