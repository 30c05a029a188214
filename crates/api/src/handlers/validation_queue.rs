//! Handlers for the `/validation-queue` resource.
//!
//! Bulk add/remove are deliberately not transactional: each item is
//! attempted on its own and the response reports per-item outcomes, so
//! one bad id never discards the rest of the batch.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use commhub_core::error::CoreError;
use commhub_core::queue::is_valid_queue_status;
use commhub_core::types::DbId;
use commhub_db::models::validation_queue::{QueueEntry, QueueEntryWithSubmission};
use commhub_db::repositories::ValidationQueueRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::auth::validate_email;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /validation-queue`.
#[derive(Debug, Deserialize)]
pub struct QueueQuery {
    pub admin_email: Option<String>,
}

/// Request body for `POST /validation-queue` (single or bulk).
#[derive(Debug, Deserialize)]
pub struct AddQueueRequest {
    pub admin_email: String,
    pub submission_id: Option<String>,
    pub submission_ids: Option<Vec<String>>,
}

/// Request body for `DELETE /validation-queue` (single or bulk).
#[derive(Debug, Deserialize)]
pub struct RemoveQueueRequest {
    pub admin_email: String,
    pub submission_id: Option<String>,
    pub submission_ids: Option<Vec<String>>,
}

/// Request body for `PATCH /validation-queue/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    pub status: String,
}

/// Per-item outcome of a (possibly bulk) queue add.
#[derive(Debug, Serialize)]
pub struct AddOutcome {
    pub added: Vec<QueueEntry>,
    /// Ids whose (submission, admin) pair was already queued.
    pub already_queued: Vec<String>,
    /// Ids naming no existing submission.
    pub not_found: Vec<String>,
}

/// Per-item outcome of a (possibly bulk) queue remove.
#[derive(Debug, Serialize)]
pub struct RemoveOutcome {
    pub removed: Vec<String>,
    pub not_found: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/validation-queue?admin_email=
///
/// The admin's worklist, each entry joined with its submission.
pub async fn get_queue(
    State(state): State<AppState>,
    Query(params): Query<QueueQuery>,
) -> AppResult<Json<Vec<QueueEntryWithSubmission>>> {
    let admin_email = params
        .admin_email
        .ok_or_else(|| AppError::BadRequest("admin_email query parameter is required".into()))?;

    let entries = ValidationQueueRepo::list_for_admin(&state.pool, &admin_email).await?;
    Ok(Json(entries))
}

/// POST /api/v1/validation-queue
///
/// Assign one or many submissions to an admin. Already-queued pairs are
/// benign no-ops, unknown submissions are reported per item.
pub async fn add_to_queue(
    State(state): State<AppState>,
    Json(input): Json<AddQueueRequest>,
) -> AppResult<(StatusCode, Json<AddOutcome>)> {
    validate_email(&input.admin_email)?;
    let ids = collect_ids(input.submission_id, input.submission_ids)?;

    let mut outcome = AddOutcome {
        added: Vec::new(),
        already_queued: Vec::new(),
        not_found: Vec::new(),
    };

    for id in ids {
        match ValidationQueueRepo::add(&state.pool, &id, &input.admin_email).await {
            Ok(Some(entry)) => outcome.added.push(entry),
            Ok(None) => outcome.already_queued.push(id),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                outcome.not_found.push(id);
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!(
        admin = %input.admin_email,
        added = outcome.added.len(),
        already_queued = outcome.already_queued.len(),
        not_found = outcome.not_found.len(),
        "Queue add processed"
    );

    let status = if outcome.added.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(outcome)))
}

/// DELETE /api/v1/validation-queue
///
/// Remove one or many submissions from an admin's queue. Partial success
/// is reported per item; nothing is rolled back.
pub async fn remove_from_queue(
    State(state): State<AppState>,
    Json(input): Json<RemoveQueueRequest>,
) -> AppResult<Json<RemoveOutcome>> {
    validate_email(&input.admin_email)?;
    let ids = collect_ids(input.submission_id, input.submission_ids)?;

    let mut outcome = RemoveOutcome {
        removed: Vec::new(),
        not_found: Vec::new(),
    };

    for id in ids {
        if ValidationQueueRepo::remove(&state.pool, &id, &input.admin_email).await? {
            outcome.removed.push(id);
        } else {
            outcome.not_found.push(id);
        }
    }

    tracing::info!(
        admin = %input.admin_email,
        removed = outcome.removed.len(),
        not_found = outcome.not_found.len(),
        "Queue remove processed"
    );

    Ok(Json(outcome))
}

/// PATCH /api/v1/validation-queue/{id}
///
/// Update a queue entry's review progress status.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEntryRequest>,
) -> AppResult<Json<QueueEntry>> {
    if !is_valid_queue_status(&input.status) {
        return Err(AppError::BadRequest(format!(
            "status must be one of pending, in_progress, completed, cancelled, got '{}'",
            input.status
        )));
    }

    let entry = ValidationQueueRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Queue entry",
                id: id.to_string(),
            })
        })?;

    Ok(Json(entry))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Merge the single and bulk id fields into one non-empty list.
fn collect_ids(
    single: Option<String>,
    bulk: Option<Vec<String>>,
) -> Result<Vec<String>, AppError> {
    let mut ids = bulk.unwrap_or_default();
    if let Some(id) = single {
        ids.push(id);
    }
    if ids.is_empty() {
        return Err(AppError::BadRequest(
            "submission_id or submission_ids is required".into(),
        ));
    }
    Ok(ids)
}
