//! Preview resolution for `/submissions/{id}/preview` and
//! `/web-data/{id}/preview`.
//!
//! Looks up the inline payload in the media table matching the
//! submission's file type (documents fall back to the preview column on
//! the submission itself), and serves it as a self-describing data URL.
//! The lookup runs under a short timeout so a slow query cannot hold the
//! request for longer than the configured cap, and a missing preview is
//! a structured 404, not an error.

use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use commhub_core::error::CoreError;
use commhub_core::preview::{default_mime_type, normalize_preview};
use commhub_core::status::FILE_DOCUMENT;
use commhub_db::repositories::{MediaRepo, SubmissionRepo};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/submissions/{id}/preview
///
/// Resolve the preview for a submission of any file type.
pub async fn get_submission_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let cap = Duration::from_secs(state.config.preview_timeout_secs);
    let resolved = tokio::time::timeout(cap, resolve_preview(&state, &id, None))
        .await
        .map_err(|_| AppError::InternalError("Preview lookup timed out".into()))??;

    Ok(preview_response(&id, resolved))
}

/// GET /api/v1/web-data/{id}/preview
///
/// Resolve a document preview from the web_data table regardless of the
/// submission's declared file type.
pub async fn get_web_data_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let cap = Duration::from_secs(state.config.preview_timeout_secs);
    let resolved = tokio::time::timeout(cap, resolve_preview(&state, &id, Some(FILE_DOCUMENT)))
        .await
        .map_err(|_| AppError::InternalError("Preview lookup timed out".into()))??;

    Ok(preview_response(&id, resolved))
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Locate and normalize the stored preview for a submission.
///
/// `file_type_override` forces the lookup table (used by the web-data
/// endpoint); otherwise the submission's own file type decides.
///
/// Returns `Ok(None)` when the submission exists but has no preview
/// anywhere.
async fn resolve_preview(
    state: &AppState,
    id: &str,
    file_type_override: Option<&str>,
) -> AppResult<Option<(String, String)>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Submission",
                id: id.to_string(),
            })
        })?;

    let file_type = file_type_override
        .unwrap_or(&submission.file_type)
        .to_string();

    let stored = MediaRepo::find_preview(&state.pool, id, &file_type).await?;

    let (payload, stored_mime) = match stored {
        Some(row) => (row.preview, row.mime_type),
        None => (None, None),
    };

    // Documents keep an inline fallback on the submission row itself.
    let (payload, stored_mime) = match payload.filter(|p| !p.is_empty()) {
        Some(p) => (Some(p), stored_mime),
        None if file_type == FILE_DOCUMENT => {
            (submission.preview.filter(|p| !p.is_empty()), None)
        }
        None => (None, None),
    };

    let Some(payload) = payload else {
        return Ok(None);
    };

    let mime = stored_mime
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default_mime_type(&file_type).to_string());
    let normalized = normalize_preview(&payload, Some(&mime), &file_type);

    Ok(Some((normalized, mime)))
}

/// Build the wire response: 200 with the data URL, or the structured
/// preview-less 404.
fn preview_response(id: &str, resolved: Option<(String, String)>) -> Response {
    match resolved {
        Some((preview, mime_type)) => {
            Json(json!({ "preview": preview, "mime_type": mime_type })).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "preview": null,
                "error": format!("No preview available for submission {id}"),
            })),
        )
            .into_response(),
    }
}
