//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (same middleware stack as production)
//! through `tower::ServiceExt::oneshot`, so every request passes CORS,
//! request-id, timeout, and panic-recovery layers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use commhub_api::config::ServerConfig;
use commhub_api::router::build_app_router;
use commhub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        preview_timeout_secs: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request and return the raw response.
///
/// `body` is serialized as JSON when present; `admin` sets the
/// `x-admin-email` header.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    admin: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(admin) = admin {
        builder = builder.header("x-admin-email", admin);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_as_admin(app: Router, uri: &str, admin: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(admin)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_as_admin(
    app: Router,
    uri: &str,
    body: Value,
    admin: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(admin)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, None).await
}

pub async fn post_empty_as_admin(app: Router, uri: &str, admin: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(admin)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), None).await
}

pub async fn patch_json_as_admin(
    app: Router,
    uri: &str,
    body: Value,
    admin: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), Some(admin)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_as_admin(app: Router, uri: &str, admin: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(admin)).await
}

pub async fn delete_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body), None).await
}

/// Collect and parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("invalid JSON body: {e}"))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register an active admin directly through the API and return its email.
pub async fn seed_admin(app: &Router, email: &str, role: &str) {
    let response = post_json(
        app.clone(),
        "/api/v1/admin/register",
        serde_json::json!({
            "name": "Seed Admin",
            "email": email,
            "password": "review-123",
            "admin_role": role,
            "account_status": "active",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
}

/// Create a submission through the API with the given id and file type.
pub async fn seed_submission(app: &Router, id: &str, file_type: &str, owner: &str) {
    let response = post_json(
        app.clone(),
        "/api/v1/submissions",
        serde_json::json!({
            "id": id,
            "user_email": owner,
            "file_name": format!("{id}.dat"),
            "file_type": file_type,
            "file_size": 1024,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
}
