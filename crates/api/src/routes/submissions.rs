//! Route definitions for the `/submissions` resource, including the
//! nested comment threads and preview resolution.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{comment, preview, submission};
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// GET    /                            -> list_submissions (?user_email)
/// POST   /                            -> create_submission
/// GET    /pending                     -> list_pending
/// GET    /validated                   -> list_validated
/// GET    /rejected                    -> list_rejected
/// GET    /{id}                        -> get_submission
/// DELETE /{id}                        -> delete_submission (?user_email)
/// POST   /{id}/submit                 -> submit
/// POST   /{id}/validate               -> validate
/// POST   /{id}/reject                 -> reject
/// GET    /{id}/preview                -> get_submission_preview
/// GET    /{id}/comments               -> list_comments
/// POST   /{id}/comments               -> create_comment
/// PUT    /{id}/comments/{comment_id}  -> update_comment
/// DELETE /{id}/comments/{comment_id}  -> delete_comment (?author_email)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(submission::list_submissions).post(submission::create_submission),
        )
        // Status listings (static segments win over `{id}`).
        .route("/pending", get(submission::list_pending))
        .route("/validated", get(submission::list_validated))
        .route("/rejected", get(submission::list_rejected))
        .route(
            "/{id}",
            get(submission::get_submission).delete(submission::delete_submission),
        )
        // Lifecycle transitions.
        .route("/{id}/submit", post(submission::submit))
        .route("/{id}/validate", post(submission::validate))
        .route("/{id}/reject", post(submission::reject))
        // Preview resolution.
        .route("/{id}/preview", get(preview::get_submission_preview))
        // Comment thread.
        .route(
            "/{id}/comments",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route(
            "/{id}/comments/{comment_id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
}
