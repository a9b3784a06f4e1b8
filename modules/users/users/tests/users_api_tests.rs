#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the users REST API over the in-memory module.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt as _;
use users::{UsersConfig, UsersModule};

const USERS: &str = "/users/v1/users";

fn app() -> Router {
    UsersModule::in_memory(&UsersConfig::default()).router()
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    call_raw(app, method, uri, body.map(|b| b.to_string())).await
}

async fn call_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, Body::from))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_original(app: &Router) -> String {
    let (status, json) = call(
        app,
        "POST",
        USERS,
        Some(json!({"name": "Original Name", "email": "original@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn create_binds_both_fields() {
    let app = app();

    let (status, json) = call(
        &app,
        "POST",
        USERS,
        Some(json!({"name": "John Doe", "email": "johndoe@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "John Doe");
    assert_eq!(json["email"], "johndoe@example.com");

    let uri = format!("{USERS}/{}", json["id"].as_str().unwrap());
    let (status, fetched) = call(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, json);
}

#[tokio::test]
async fn patch_with_absent_key_keeps_stored_value() {
    let app = app();
    let id = create_original(&app).await;

    let (status, json) = call(
        &app,
        "PATCH",
        &format!("{USERS}/{id}"),
        Some(json!({"name": "Updated Name"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Updated Name");
    assert_eq!(json["email"], "original@example.com");
}

#[tokio::test]
async fn patch_with_explicit_null_clears_field() {
    let app = app();
    let id = create_original(&app).await;

    let (status, json) = call(
        &app,
        "PATCH",
        &format!("{USERS}/{id}"),
        Some(json!({"email": null})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Original Name");
    assert_eq!(json["email"], Value::Null);

    let (_, fetched) = call(&app, "GET", &format!("{USERS}/{id}"), None).await;
    assert_eq!(fetched["email"], Value::Null);
}

#[tokio::test]
async fn empty_patch_is_a_no_op() {
    let app = app();
    let id = create_original(&app).await;

    let (status, json) = call(&app, "PATCH", &format!("{USERS}/{id}"), Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Original Name");
    assert_eq!(json["email"], "original@example.com");
}

#[tokio::test]
async fn patch_of_unknown_user_is_not_found() {
    let app = app();
    let uri = format!("{USERS}/{}", uuid::Uuid::new_v4());

    let (status, json) = call(&app, "PATCH", &uri, Some(json!({"name": "Ghost"}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "users.not_found");
    assert_eq!(json["instance"], uri);
}

#[tokio::test]
async fn invalid_email_is_unprocessable() {
    let app = app();
    let id = create_original(&app).await;

    let (status, json) = call(
        &app,
        "PATCH",
        &format!("{USERS}/{id}"),
        Some(json!({"email": "not-an-email"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "users.validation");

    let (_, fetched) = call(&app, "GET", &format!("{USERS}/{id}"), None).await;
    assert_eq!(fetched["email"], "original@example.com");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app();
    let id = create_original(&app).await;

    let (status, json) = call_raw(
        &app,
        "PATCH",
        &format!("{USERS}/{id}"),
        Some(r#"{"name": "#.to_owned()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "users.invalid_body");
}

#[tokio::test]
async fn unknown_patch_keys_are_rejected() {
    let app = app();
    let id = create_original(&app).await;

    let (status, json) = call(
        &app,
        "PATCH",
        &format!("{USERS}/{id}"),
        Some(json!({"nickname": "Johnny"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "users.invalid_body");
}

#[tokio::test]
async fn list_returns_created_users() {
    let app = app();
    create_original(&app).await;
    create_original(&app).await;

    let (status, json) = call(&app, "GET", USERS, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app();

    let (status, json) = call(&app, "GET", "/users/v1/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/users/v1/users/{id}"]["patch"].is_object());
    assert!(json["components"]["schemas"]["PatchUserRequest"].is_object());
}
