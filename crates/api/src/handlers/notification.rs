//! Handlers for the `/notifications` resource.
//!
//! Every mutation is scoped to the owning user email; a caller naming
//! someone else's notification gets 404, never an existence hint.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use commhub_core::error::CoreError;
use commhub_core::notify::is_valid_kind;
use commhub_core::types::DbId;
use commhub_db::models::notification::{CreateNotification, Notification};
use commhub_db::repositories::NotificationRepo;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::handlers::auth::validate_email;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct InboxQuery {
    pub user_email: Option<String>,
    /// If `true`, return only the unread count instead of the inbox.
    pub count_only: Option<bool>,
}

/// Request body for `PATCH /notifications`: one id or the whole inbox.
#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub user_email: String,
    pub id: Option<DbId>,
    pub mark_all: Option<bool>,
}

/// Request body for `DELETE /notifications`: one id or the whole inbox.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub user_email: String,
    pub id: Option<DbId>,
    pub delete_all: Option<bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications?user_email=&count_only=
///
/// List the user's inbox newest first, or just the unread count when
/// `count_only` is set.
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<InboxQuery>,
) -> AppResult<Response> {
    let user_email = params
        .user_email
        .ok_or_else(|| AppError::BadRequest("user_email query parameter is required".into()))?;

    if params.count_only.unwrap_or(false) {
        let count = NotificationRepo::unread_count(&state.pool, &user_email).await?;
        return Ok(Json(json!({ "count": count })).into_response());
    }

    let inbox = NotificationRepo::list_for_user(&state.pool, &user_email).await?;
    Ok(Json(inbox).into_response())
}

/// POST /api/v1/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    Json(input): Json<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    validate_email(&input.user_email)?;
    if !is_valid_kind(&input.kind) {
        return Err(AppError::BadRequest(format!(
            "kind must be one of success, error, info, warning, got '{}'",
            input.kind
        )));
    }
    if input.title.trim().is_empty() || input.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "title and message must not be empty".into(),
        ));
    }

    let notification = NotificationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// PATCH /api/v1/notifications
///
/// Mark one notification read (`id`) or the whole inbox (`mark_all`).
pub async fn mark_read(
    State(state): State<AppState>,
    Json(input): Json<MarkReadRequest>,
) -> AppResult<Response> {
    if input.mark_all.unwrap_or(false) {
        let marked = NotificationRepo::mark_all_read(&state.pool, &input.user_email).await?;
        return Ok(Json(json!({ "marked_read": marked })).into_response());
    }

    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("id is required unless mark_all is set".into()))?;

    let found = NotificationRepo::mark_read(&state.pool, id, &input.user_email).await?;
    if !found {
        return Err(notification_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// DELETE /api/v1/notifications
///
/// Delete one notification (`id`) or the whole inbox (`delete_all`).
pub async fn delete_notifications(
    State(state): State<AppState>,
    Json(input): Json<DeleteRequest>,
) -> AppResult<Response> {
    if input.delete_all.unwrap_or(false) {
        let deleted = NotificationRepo::delete_all(&state.pool, &input.user_email).await?;
        return Ok(Json(json!({ "deleted": deleted })).into_response());
    }

    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("id is required unless delete_all is set".into()))?;

    let found = NotificationRepo::delete(&state.pool, id, &input.user_email).await?;
    if !found {
        return Err(notification_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn notification_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Notification",
        id: id.to_string(),
    })
}
