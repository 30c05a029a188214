//! HTTP-level integration tests for the submission lifecycle: creation,
//! the tolerant create-on-submit path, review transitions with their
//! side effects, and owner deletes.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_empty, post_json, post_json_as_admin};
use serde_json::json;
use sqlx::PgPool;

const OWNER: &str = "volunteer@example.com";
const REVIEWER: &str = "reviewer@example.com";

// ---------------------------------------------------------------------------
// Creation and queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_echoes_fields_and_fetch_matches(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/submissions",
        json!({
            "id": "s-100",
            "user_email": OWNER,
            "file_name": "sunset.jpg",
            "file_type": "image",
            "file_size": 34567,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], "s-100");
    assert_eq!(created["user_email"], OWNER);
    assert_eq!(created["file_name"], "sunset.jpg");
    assert_eq!(created["file_type"], "image");
    assert_eq!(created["file_size"], 34567);
    assert_eq!(created["status"], "pending");

    let response = get(app, "/api/v1/submissions/s-100").await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_id_is_conflict(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "dup-1", "image", OWNER).await;

    let response = post_json(
        app,
        "/api/v1/submissions",
        json!({
            "id": "dup-1",
            "user_email": OWNER,
            "file_name": "other.png",
            "file_type": "image",
            "file_size": 1,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_validation_errors(pool: PgPool) {
    let app = build_test_app(pool);

    // Unknown file type.
    let response = post_json(
        app.clone(),
        "/api/v1/submissions",
        json!({
            "id": "bad-1",
            "user_email": OWNER,
            "file_name": "x.exe",
            "file_type": "binary",
            "file_size": 1,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing user_email on the listing endpoint.
    let response = get(app, "/api/v1/submissions").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_listing_and_status_listings(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "a-1", "image", OWNER).await;
    common::seed_submission(&app, "a-2", "audio", OWNER).await;
    common::seed_submission(&app, "b-1", "video", "someone-else@example.com").await;

    let response = get(app.clone(), &format!("/api/v1/submissions?user_email={OWNER}")).await;
    let mine = body_json(response).await;
    assert_eq!(mine.as_array().unwrap().len(), 2);

    let response = get(app.clone(), "/api/v1/submissions/pending").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    let response = get(app, "/api/v1/submissions/validated").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Submit (tolerant upsert)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_is_idempotent(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "s-1", "image", OWNER).await;

    let response = post_empty(app.clone(), "/api/v1/submissions/s-1/submit").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "submitted");

    // Submitting again neither errors nor changes the status.
    let response = post_empty(app, "/api/v1/submissions/s-1/submit").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "submitted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_unknown_id_without_payload_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_empty(app, "/api/v1/submissions/ghost/submit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_creates_from_full_payload(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/submissions/late-1/submit",
        json!({
            "user_email": OWNER,
            "file_name": "late.mp3",
            "file_type": "audio",
            "file_size": 999,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "late-1");
    assert_eq!(body["status"], "submitted");

    let response = get(app, "/api/v1/submissions/late-1").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Review decisions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validate_requires_known_active_admin(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "v-1", "image", OWNER).await;

    // No admin identity at all.
    let response = post_empty(app.clone(), "/api/v1/submissions/v-1/validate").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown admin.
    let response = post_json_as_admin(
        app,
        "/api/v1/submissions/v-1/validate",
        json!({}),
        "nobody@example.com",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validate_notifies_owner(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_admin(&app, REVIEWER, "validator_admin").await;
    common::seed_submission(&app, "v-2", "image", OWNER).await;

    let response = common::post_empty_as_admin(
        app.clone(),
        "/api/v1/submissions/v-2/validate",
        REVIEWER,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "validated");

    let response = get(
        app,
        &format!("/api/v1/notifications?user_email={OWNER}"),
    )
    .await;
    let inbox = body_json(response).await;
    let inbox = inbox.as_array().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0]["kind"], "success");
    assert_eq!(inbox[0]["action_url"], "/submissions/v-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_stores_reason_and_notifies_owner(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_admin(&app, REVIEWER, "validator_admin").await;
    common::seed_submission(&app, "s1", "image", OWNER).await;

    // Admin email carried in the body instead of the header.
    let response = post_json(
        app.clone(),
        "/api/v1/submissions/s1/reject",
        json!({
            "admin_email": REVIEWER,
            "rejection_reason": "duplicate",
            "rejection_feedback": "Already submitted last week.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "rejected");
    assert_eq!(body["rejection_reason"], "duplicate");
    assert_eq!(body["rejection_feedback"], "Already submitted last week.");

    let response = get(
        app,
        &format!("/api/v1/notifications?user_email={OWNER}"),
    )
    .await;
    let inbox = body_json(response).await;
    let inbox = inbox.as_array().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0]["kind"], "error");
    assert_eq!(inbox[0]["action_url"], "/submissions/s1");
    assert!(inbox[0]["message"]
        .as_str()
        .unwrap()
        .contains("duplicate"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_terminal_states_do_not_cross(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_admin(&app, REVIEWER, "validator_admin").await;
    common::seed_submission(&app, "t-1", "video", OWNER).await;

    let response =
        common::post_empty_as_admin(app.clone(), "/api/v1/submissions/t-1/reject", REVIEWER).await;
    assert_eq!(response.status(), StatusCode::OK);

    // rejected -> validated is refused.
    let response =
        common::post_empty_as_admin(app.clone(), "/api/v1/submissions/t-1/validate", REVIEWER)
            .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Re-rejecting is an idempotent no-op, and does not duplicate the
    // owner notification.
    let response =
        common::post_empty_as_admin(app.clone(), "/api/v1/submissions/t-1/reject", REVIEWER).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/api/v1/notifications?user_email={OWNER}")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_decisions_land_in_audit_log(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_admin(&app, "boss@example.com", "super_admin").await;
    common::seed_submission(&app, "a-9", "image", OWNER).await;

    common::post_empty_as_admin(app.clone(), "/api/v1/submissions/a-9/validate", "boss@example.com")
        .await;

    let response = common::get_as_admin(app, "/api/v1/admin/actions", "boss@example.com").await;
    let actions = body_json(response).await;
    let actions = actions.as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["action_type"], "submission_validated");
    assert_eq!(actions[0]["target_id"], "a-9");
}

// ---------------------------------------------------------------------------
// Owner delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_delete_cascades(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "d-1", "image", OWNER).await;
    post_json(
        app.clone(),
        "/api/v1/submissions/d-1/comments",
        json!({ "author_email": OWNER, "author_type": "user", "text": "look at this" }),
    )
    .await;

    let response = delete(
        app.clone(),
        &format!("/api/v1/submissions/d-1?user_email={OWNER}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), "/api/v1/submissions/d-1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The thread is gone with it.
    let response = get(app, "/api/v1/submissions/d-1/comments").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_by_stranger_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    common::seed_submission(&app, "d-2", "image", OWNER).await;

    let response = delete(
        app.clone(),
        "/api/v1/submissions/d-2?user_email=stranger@example.com",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/v1/submissions/d-2").await;
    assert_eq!(response.status(), StatusCode::OK);
}
