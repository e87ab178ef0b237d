//! HTTP API tests.
//!
//! The full stack (router -> service -> SeaORM store) runs against an
//! in-memory SQLite database; requests go through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::DatabaseConfig;
use employee_service_lib::api::{create_router, AppState};
use employee_service_lib::infra::Database;

async fn app() -> Router {
    let database = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
    create_router(AppState::from_database(Arc::new(database)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn leslie() -> Value {
    json!({
        "firstName": "Leslie",
        "lastName": "Andrews",
        "email": "leslie@example.com"
    })
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_degraded_when_database_closed() {
    let database = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
    database.get_connection().close().await.unwrap();
    let app = create_router(AppState::from_database(Arc::new(database)));

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
    assert_eq!(body["services"]["database"]["error"], "database unreachable");
}

#[tokio::test]
async fn test_list_starts_empty() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_get() {
    let app = app().await;

    let (status, created) = send(&app, Method::POST, "/api/employees", Some(leslie())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["firstName"], "Leslie");

    let (status, fetched) = send(&app, Method::GET, &format!("/api/employees/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let app = app().await;
    let mut payload = leslie();
    payload["id"] = json!(77);

    let (status, created) = send(&app, Method::POST, "/api/employees", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], json!(77));
}

#[tokio::test]
async fn test_create_rejects_invalid_email() {
    let app = app().await;
    let mut payload = leslie();
    payload["email"] = json!("not-an-email");

    let (status, body) = send(&app, Method::POST, "/api/employees", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid email format");
}

#[tokio::test]
async fn test_create_rejects_missing_field() {
    let app = app().await;
    let payload = json!({ "firstName": "Leslie" });

    let (status, body) = send(&app, Method::POST, "/api/employees", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_unknown_is_not_found() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/employees/4242", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = app().await;

    for uri in ["/api/employees/abc", "/api/employees/99999999999"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    let (status, body) = send(&app, Method::DELETE, "/api/employees/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/api/employees", Some(leslie())).await;
    let uri = format!("/api/employees/{}", created["id"]);

    let payload = json!({
        "firstName": "Leslie",
        "lastName": "Andrews-Smith",
        "email": "leslie.smith@example.com"
    });
    let (status, updated) = send(&app, Method::PUT, &uri, Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["lastName"], "Andrews-Smith");

    let (_, all) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_unknown_is_not_found() {
    let app = app().await;
    let (status, _) = send(&app, Method::PUT, "/api/employees/31", Some(leslie())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/api/employees", Some(leslie())).await;
    let uri = format!("/api/employees/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_lists_employee_paths() {
    let app = app().await;
    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/employees"].is_object());
    assert!(doc["paths"]["/api/employees/{id}"].is_object());
}
