//! HTTP-level integration tests for preview resolution: data-URL
//! normalization, passthrough of already-self-describing values, the
//! document fallback, and the structured preview-less 404.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

const OWNER: &str = "volunteer@example.com";

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bare_base64_image_preview_defaults_to_jpeg(pool: PgPool) {
    let app = build_test_app(pool);

    // Raw base64 with no declared MIME type.
    post_json(
        app.clone(),
        "/api/v1/submissions",
        json!({
            "id": "p-1",
            "user_email": OWNER,
            "file_name": "shot.jpg",
            "file_type": "image",
            "file_size": 64,
            "preview": "/9j/4AAQSkZJRg==",
        }),
    )
    .await;

    let response = get(app, "/api/v1/submissions/p-1/preview").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(
        body["preview"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,"),
        "bare payload should be wrapped with the image default"
    );
    assert_eq!(body["mime_type"], "image/jpeg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_data_url_passes_through_unchanged(pool: PgPool) {
    let app = build_test_app(pool);
    let data_url = "data:image/png;base64,iVBORw0KGgo=";

    post_json(
        app.clone(),
        "/api/v1/submissions",
        json!({
            "id": "p-2",
            "user_email": OWNER,
            "file_name": "pixel.png",
            "file_type": "image",
            "file_size": 8,
            "preview": data_url,
        }),
    )
    .await;

    let response = get(app, "/api/v1/submissions/p-2/preview").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["preview"], data_url);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_without_preview_is_structured_404(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "s1", "document", OWNER).await;

    let response = get(app, "/api/v1/submissions/s1/preview").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["preview"].is_null());
    assert!(body["error"].as_str().unwrap().contains("s1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_preview_wraps_as_pdf(pool: PgPool) {
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/submissions",
        json!({
            "id": "doc-1",
            "user_email": OWNER,
            "file_name": "paper.pdf",
            "file_type": "document",
            "file_size": 1000,
            "preview": "JVBERi0xLjQ=",
        }),
    )
    .await;

    let response = get(app.clone(), "/api/v1/submissions/doc-1/preview").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["preview"]
        .as_str()
        .unwrap()
        .starts_with("data:application/pdf;base64,"));

    // The web-data endpoint resolves the same payload.
    let response = get(app, "/api/v1/web-data/doc-1/preview").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["mime_type"], "application/pdf");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_submission_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/submissions/ghost/preview").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
