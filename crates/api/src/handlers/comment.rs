//! Handlers for the comment thread nested under `/submissions/{id}/comments`.
//!
//! Updates are author-only; deletes are author-or-admin. Author mismatch
//! is reported as 404 so callers cannot probe for foreign comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use commhub_core::error::CoreError;
use commhub_core::roles::{is_valid_author_type, ACCOUNT_ACTIVE};
use commhub_core::types::DbId;
use commhub_db::models::comment::{Comment, CreateComment};
use commhub_db::repositories::{AdminRepo, CommentRepo, SubmissionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::auth::validate_email;
use crate::middleware::identity::AdminEmailHeader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Request body for `PUT /submissions/{id}/comments/{comment_id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub author_email: String,
    pub text: String,
}

/// Query parameters for `DELETE /submissions/{id}/comments/{comment_id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteCommentQuery {
    pub author_email: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/submissions/{id}/comments
///
/// Return the full thread in insertion order. Knowledge of the submission
/// id is the only access control.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> AppResult<Json<Vec<Comment>>> {
    ensure_submission_exists(&state, &submission_id).await?;
    let thread = CommentRepo::list_for_submission(&state.pool, &submission_id).await?;
    Ok(Json(thread))
}

/// POST /api/v1/submissions/{id}/comments
///
/// Create a comment or a reply. A reply's parent must belong to the same
/// submission.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    if input.text.trim().is_empty() {
        return Err(AppError::BadRequest("text must not be empty".into()));
    }
    if !is_valid_author_type(&input.author_type) {
        return Err(AppError::BadRequest(format!(
            "author_type must be one of user, admin, got '{}'",
            input.author_type
        )));
    }
    validate_email(&input.author_email)?;

    ensure_submission_exists(&state, &submission_id).await?;

    if let Some(parent_id) = input.parent_comment_id {
        let parent = CommentRepo::find_by_id(&state.pool, parent_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("parent comment {parent_id} does not exist"))
            })?;
        if parent.submission_id != submission_id {
            return Err(AppError::BadRequest(format!(
                "parent comment {parent_id} belongs to a different submission"
            )));
        }
    }

    let comment = CommentRepo::create(&state.pool, &submission_id, &input).await?;

    tracing::info!(
        submission_id = %submission_id,
        comment_id = comment.id,
        author_type = %comment.author_type,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(comment)))
}

/// PUT /api/v1/submissions/{id}/comments/{comment_id}
///
/// Update a comment's text. Only the original author may update; anyone
/// else gets the same 404 as a missing comment.
pub async fn update_comment(
    State(state): State<AppState>,
    Path((submission_id, comment_id)): Path<(String, DbId)>,
    Json(input): Json<UpdateCommentRequest>,
) -> AppResult<Json<Comment>> {
    if input.text.trim().is_empty() {
        return Err(AppError::BadRequest("text must not be empty".into()));
    }

    ensure_comment_in_thread(&state, &submission_id, comment_id).await?;

    let updated = CommentRepo::update_text(&state.pool, comment_id, &input.author_email, &input.text)
        .await?
        .ok_or_else(|| comment_not_found(comment_id))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/submissions/{id}/comments/{comment_id}?author_email=
///
/// Delete a comment; replies cascade. An active admin (via the
/// `x-admin-email` header) may delete any comment, everyone else only
/// their own.
pub async fn delete_comment(
    AdminEmailHeader(admin_email): AdminEmailHeader,
    State(state): State<AppState>,
    Path((submission_id, comment_id)): Path<(String, DbId)>,
    Query(params): Query<DeleteCommentQuery>,
) -> AppResult<StatusCode> {
    ensure_comment_in_thread(&state, &submission_id, comment_id).await?;

    if let Some(email) = admin_email {
        let admin = AdminRepo::find_by_email(&state.pool, &email)
            .await?
            .filter(|a| a.account_status == ACCOUNT_ACTIVE);
        if let Some(admin) = admin {
            CommentRepo::delete(&state.pool, comment_id).await?;
            tracing::info!(comment_id, admin = %admin.email, "Comment deleted by admin");
            return Ok(StatusCode::NO_CONTENT);
        }
    }

    let author_email = params
        .author_email
        .ok_or_else(|| AppError::BadRequest("author_email query parameter is required".into()))?;

    let deleted = CommentRepo::delete_owned(&state.pool, comment_id, &author_email).await?;
    if !deleted {
        return Err(comment_not_found(comment_id));
    }

    tracing::info!(comment_id, "Comment deleted by author");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn comment_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Comment",
        id: id.to_string(),
    })
}

async fn ensure_submission_exists(state: &AppState, submission_id: &str) -> AppResult<()> {
    SubmissionRepo::find_by_id(&state.pool, submission_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Submission",
                id: submission_id.to_string(),
            })
        })?;
    Ok(())
}

/// A comment addressed through `/submissions/{id}/comments/{comment_id}`
/// must actually hang off that submission.
async fn ensure_comment_in_thread(
    state: &AppState,
    submission_id: &str,
    comment_id: DbId,
) -> AppResult<()> {
    let comment = CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .ok_or_else(|| comment_not_found(comment_id))?;
    if comment.submission_id != submission_id {
        return Err(comment_not_found(comment_id));
    }
    Ok(())
}
