//! Handlers for the `/submissions` resource: creation, owner queries,
//! review-status transitions, and owner deletes.
//!
//! The review actions (`validate`, `reject`) carry two best-effort side
//! effects, an audit entry and an owner notification. Both are isolated:
//! their failure is logged and never fails the status update.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use commhub_core::error::CoreError;
use commhub_core::notify::review_notification;
use commhub_core::roles::ACCOUNT_ACTIVE;
use commhub_core::status::{
    can_transition, is_valid_file_type, is_valid_status, STATUS_PENDING, STATUS_REJECTED,
    STATUS_SUBMITTED, STATUS_VALIDATED,
};
use commhub_db::models::admin::Admin;
use commhub_db::models::admin_action::CreateAdminAction;
use commhub_db::models::notification::CreateNotification;
use commhub_db::models::submission::{CreateSubmission, Submission};
use commhub_db::repositories::{
    AdminActionRepo, AdminRepo, MediaRepo, NotificationRepo, SubmissionRepo,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::auth::validate_email;
use crate::middleware::identity::{AdminEmailHeader, ClientMeta};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Query parameters for owner-scoped listing and deletion.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_email: Option<String>,
}

/// Request body for `POST /submissions/{id}/submit`.
///
/// All fields are optional: when the submission already exists the body is
/// ignored, and when it does not, the full create payload must be present
/// for the tolerant create-on-submit path.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub user_email: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub preview: Option<String>,
}

/// Request body for `POST /submissions/{id}/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub admin_email: Option<String>,
}

/// Request body for `POST /submissions/{id}/reject`.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub admin_email: Option<String>,
    pub rejection_reason: Option<String>,
    pub rejection_feedback: Option<String>,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/submissions
///
/// Create a submission with its client-generated id. A duplicate id is a
/// 409 from the primary-key constraint; there is no pre-check.
pub async fn create_submission(
    State(state): State<AppState>,
    Json(input): Json<CreateSubmission>,
) -> AppResult<(StatusCode, Json<Submission>)> {
    validate_create(&input)?;

    let submission = SubmissionRepo::create(&state.pool, &input).await?;

    // Mirror an inline preview into the per-type metadata table so the
    // preview lookup finds it where it expects to.
    if let Some(preview) = &input.preview {
        MediaRepo::create_preview(&state.pool, &submission.id, &submission.file_type, preview, None)
            .await?;
    }

    tracing::info!(id = %submission.id, file_type = %submission.file_type, "Submission created");

    Ok((StatusCode::CREATED, Json(submission)))
}

/// GET /api/v1/submissions?user_email=
///
/// List the owner's submissions, newest first.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(params): Query<OwnerQuery>,
) -> AppResult<Json<Vec<Submission>>> {
    let user_email = params
        .user_email
        .ok_or_else(|| AppError::BadRequest("user_email query parameter is required".into()))?;

    let submissions = SubmissionRepo::list_for_user(&state.pool, &user_email).await?;
    Ok(Json(submissions))
}

/// GET /api/v1/submissions/{id}
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Submission>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(submission))
}

/// DELETE /api/v1/submissions/{id}?user_email=
///
/// Owner delete. Media metadata, comments, and queue entries cascade.
/// A non-owner gets the same 404 as a missing id.
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<OwnerQuery>,
) -> AppResult<StatusCode> {
    let user_email = params
        .user_email
        .ok_or_else(|| AppError::BadRequest("user_email query parameter is required".into()))?;

    let deleted = SubmissionRepo::delete_owned(&state.pool, &id, &user_email).await?;
    if !deleted {
        return Err(not_found(&id));
    }

    tracing::info!(%id, "Submission deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/submissions/pending
pub async fn list_pending(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    Ok(Json(
        SubmissionRepo::list_by_status(&state.pool, STATUS_PENDING).await?,
    ))
}

/// GET /api/v1/submissions/validated
pub async fn list_validated(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    Ok(Json(
        SubmissionRepo::list_by_status(&state.pool, STATUS_VALIDATED).await?,
    ))
}

/// GET /api/v1/submissions/rejected
pub async fn list_rejected(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    Ok(Json(
        SubmissionRepo::list_by_status(&state.pool, STATUS_REJECTED).await?,
    ))
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// POST /api/v1/submissions/{id}/submit
///
/// Move a submission to `submitted`. Tolerant of out-of-order client
/// calls: an unknown id is created first when the body carries the full
/// create payload. Submitting an already-submitted item is a no-op.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<SubmitRequest>>,
) -> AppResult<Json<Submission>> {
    let existing = SubmissionRepo::find_by_id(&state.pool, &id).await?;

    let Some(submission) = existing else {
        return create_on_submit(&state, &id, body).await;
    };

    if submission.status == STATUS_SUBMITTED {
        return Ok(Json(submission));
    }
    ensure_transition(&submission, STATUS_SUBMITTED)?;

    let updated = SubmissionRepo::update_status(&state.pool, &id, STATUS_SUBMITTED)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(%id, "Submission submitted");
    Ok(Json(updated))
}

/// POST /api/v1/submissions/{id}/validate
///
/// Review decision: mark the submission validated. The acting admin is
/// identified by the `x-admin-email` header or an `admin_email` body
/// field.
pub async fn validate(
    AdminEmailHeader(header_email): AdminEmailHeader,
    meta: ClientMeta,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<ValidateRequest>>,
) -> AppResult<Json<Submission>> {
    let body_email = body.and_then(|Json(b)| b.admin_email);
    let admin = resolve_reviewer(&state, header_email, body_email).await?;

    let submission = SubmissionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    if submission.status == STATUS_VALIDATED {
        return Ok(Json(submission));
    }
    ensure_transition(&submission, STATUS_VALIDATED)?;

    let updated = SubmissionRepo::update_status(&state.pool, &id, STATUS_VALIDATED)
        .await?
        .ok_or_else(|| not_found(&id))?;

    record_review_outcome(&state, &admin, &updated, "submission_validated", None, meta).await;

    tracing::info!(%id, admin = %admin.email, "Submission validated");
    Ok(Json(updated))
}

/// POST /api/v1/submissions/{id}/reject
///
/// Review decision: mark the submission rejected, overwriting the
/// rejection reason and feedback.
pub async fn reject(
    AdminEmailHeader(header_email): AdminEmailHeader,
    meta: ClientMeta,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<RejectRequest>>,
) -> AppResult<Json<Submission>> {
    let (body_email, reason, feedback) = match body {
        Some(Json(b)) => (b.admin_email, b.rejection_reason, b.rejection_feedback),
        None => (None, None, None),
    };
    let admin = resolve_reviewer(&state, header_email, body_email).await?;

    let submission = SubmissionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    if submission.status == STATUS_REJECTED {
        return Ok(Json(submission));
    }
    ensure_transition(&submission, STATUS_REJECTED)?;

    let updated = SubmissionRepo::reject(&state.pool, &id, reason.as_deref(), feedback.as_deref())
        .await?
        .ok_or_else(|| not_found(&id))?;

    record_review_outcome(
        &state,
        &admin,
        &updated,
        "submission_rejected",
        reason.as_deref(),
        meta,
    )
    .await;

    tracing::info!(%id, admin = %admin.email, "Submission rejected");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Submission",
        id: id.to_string(),
    })
}

fn validate_create(input: &CreateSubmission) -> Result<(), AppError> {
    if input.id.trim().is_empty() {
        return Err(AppError::BadRequest("id must not be empty".into()));
    }
    validate_email(&input.user_email)?;
    if input.file_name.trim().is_empty() {
        return Err(AppError::BadRequest("file_name must not be empty".into()));
    }
    if !is_valid_file_type(&input.file_type) {
        return Err(AppError::BadRequest(format!(
            "file_type must be one of image, audio, video, document, got '{}'",
            input.file_type
        )));
    }
    if input.file_size < 0 {
        return Err(AppError::BadRequest("file_size must not be negative".into()));
    }
    if let Some(status) = &input.status {
        if !is_valid_status(status) {
            return Err(AppError::BadRequest(format!("unknown status '{status}'")));
        }
    }
    Ok(())
}

fn ensure_transition(submission: &Submission, to: &str) -> Result<(), AppError> {
    if !can_transition(&submission.status, to) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "cannot transition submission {} from {} to {to}",
            submission.id, submission.status
        ))));
    }
    Ok(())
}

/// Create-on-submit fallback for out-of-order client calls: the caller
/// supplied the full create payload alongside the submit, so create the
/// row directly in `submitted` state.
async fn create_on_submit(
    state: &AppState,
    id: &str,
    body: Option<Json<SubmitRequest>>,
) -> AppResult<Json<Submission>> {
    let Some(Json(body)) = body else {
        return Err(not_found(id));
    };
    let (Some(user_email), Some(file_name), Some(file_type), Some(file_size)) = (
        body.user_email,
        body.file_name,
        body.file_type,
        body.file_size,
    ) else {
        return Err(not_found(id));
    };

    let input = CreateSubmission {
        id: id.to_string(),
        user_email,
        file_name,
        file_type,
        file_size,
        status: Some(STATUS_SUBMITTED.to_string()),
        preview: body.preview,
    };
    validate_create(&input)?;

    let submission = SubmissionRepo::create(&state.pool, &input).await?;
    if let Some(preview) = &input.preview {
        MediaRepo::create_preview(&state.pool, &submission.id, &submission.file_type, preview, None)
            .await?;
    }

    tracing::info!(%id, "Submission created on submit");
    Ok(Json(submission))
}

/// Resolve the acting admin for a review decision from the header or
/// body email. The account must exist and be active.
async fn resolve_reviewer(
    state: &AppState,
    header_email: Option<String>,
    body_email: Option<String>,
) -> AppResult<Admin> {
    let email = header_email.or(body_email).ok_or_else(|| {
        AppError::BadRequest(
            "admin email is required (x-admin-email header or admin_email body field)".into(),
        )
    })?;

    let admin = AdminRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown admin account".into())))?;

    if admin.account_status != ACCOUNT_ACTIVE {
        return Err(AppError::Core(CoreError::Forbidden(
            "Admin account is not active".into(),
        )));
    }
    Ok(admin)
}

/// Record the audit entry and owner notification for a review decision.
///
/// Both effects are best-effort: failures are logged as warnings and
/// never propagate, so the already-committed status update stands.
async fn record_review_outcome(
    state: &AppState,
    admin: &Admin,
    submission: &Submission,
    action_type: &str,
    rejection_reason: Option<&str>,
    meta: ClientMeta,
) {
    let audit = CreateAdminAction {
        admin_email: admin.email.clone(),
        action_type: action_type.to_string(),
        target_type: Some("submission".to_string()),
        target_id: Some(submission.id.clone()),
        description: Some(format!(
            "{} {} ({})",
            action_type, submission.id, submission.file_name
        )),
        ip_address: meta.ip_address,
        user_agent: meta.user_agent,
    };
    if let Err(e) = AdminActionRepo::create(&state.pool, &audit).await {
        tracing::warn!(error = %e, id = %submission.id, "Failed to record audit entry");
    }

    if let Some((kind, title, message)) =
        review_notification(&submission.status, &submission.file_name, rejection_reason)
    {
        let notification = CreateNotification {
            user_email: submission.user_email.clone(),
            kind: kind.to_string(),
            title,
            message,
            action_url: Some(format!("/submissions/{}", submission.id)),
        };
        if let Err(e) = NotificationRepo::create(&state.pool, &notification).await {
            tracing::warn!(error = %e, id = %submission.id, "Failed to create owner notification");
        }
    }
}
