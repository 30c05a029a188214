//! HTTP-level integration tests for the validation-queue endpoints:
//! single and bulk assignment with per-item outcomes, worklist listing,
//! and entry status updates.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete_json, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

const OWNER: &str = "volunteer@example.com";
const REVIEWER: &str = "reviewer@example.com";

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_add_then_duplicate_is_benign(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "q-1", "image", OWNER).await;

    let response = post_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({ "admin_email": REVIEWER, "submission_id": "q-1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["added"].as_array().unwrap().len(), 1);
    assert_eq!(body["added"][0]["status"], "pending");

    // The duplicate add reports "already queued" with a 200, not an error.
    let response = post_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({ "admin_email": REVIEWER, "submission_id": "q-1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["added"].as_array().unwrap().is_empty());
    assert_eq!(body["already_queued"], json!(["q-1"]));

    // Exactly one entry in the worklist.
    let response = get(
        app,
        &format!("/api/v1/validation-queue?admin_email={REVIEWER}"),
    )
    .await;
    let entries = body_json(response).await;
    assert_eq!(entries.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_add_reports_per_item_outcomes(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "q-1", "image", OWNER).await;
    common::seed_submission(&app, "q-2", "audio", OWNER).await;

    // q-1 is already assigned; "ghost" does not exist.
    post_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({ "admin_email": REVIEWER, "submission_id": "q-1" }),
    )
    .await;

    let response = post_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({
            "admin_email": REVIEWER,
            "submission_ids": ["q-1", "q-2", "ghost"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["added"].as_array().unwrap().len(), 1);
    assert_eq!(body["added"][0]["submission_id"], "q-2");
    assert_eq!(body["already_queued"], json!(["q-1"]));
    assert_eq!(body["not_found"], json!(["ghost"]));

    // The partial failure did not discard the successful add.
    let response = get(
        app,
        &format!("/api/v1/validation-queue?admin_email={REVIEWER}"),
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_worklist_includes_submission_fields(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "q-3", "video", OWNER).await;
    post_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({ "admin_email": REVIEWER, "submission_id": "q-3" }),
    )
    .await;

    let response = get(
        app,
        &format!("/api/v1/validation-queue?admin_email={REVIEWER}"),
    )
    .await;
    let entries = body_json(response).await;
    let entry = &entries.as_array().unwrap()[0];
    assert_eq!(entry["submission_id"], "q-3");
    assert_eq!(entry["file_name"], "q-3.dat");
    assert_eq!(entry["file_type"], "video");
    assert_eq!(entry["submission_status"], "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_remove_is_partial(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "q-4", "image", OWNER).await;
    post_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({ "admin_email": REVIEWER, "submission_id": "q-4" }),
    )
    .await;

    let response = delete_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({
            "admin_email": REVIEWER,
            "submission_ids": ["q-4", "never-queued"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["removed"], json!(["q-4"]));
    assert_eq!(body["not_found"], json!(["never-queued"]));

    let response = get(
        app,
        &format!("/api/v1/validation-queue?admin_email={REVIEWER}"),
    )
    .await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_ids_are_bad_request(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({ "admin_email": REVIEWER }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/v1/validation-queue").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_entry_status_update(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "q-5", "image", OWNER).await;
    let response = post_json(
        app.clone(),
        "/api/v1/validation-queue",
        json!({ "admin_email": REVIEWER, "submission_id": "q-5" }),
    )
    .await;
    let entry_id = body_json(response).await["added"][0]["id"].as_i64().unwrap();

    let response = patch_json(
        app.clone(),
        &format!("/api/v1/validation-queue/{entry_id}"),
        json!({ "status": "in_progress" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "in_progress");

    // Unknown status is refused.
    let response = patch_json(
        app.clone(),
        &format!("/api/v1/validation-queue/{entry_id}"),
        json!({ "status": "parked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown entry is 404.
    let response = patch_json(
        app,
        "/api/v1/validation-queue/999999",
        json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
