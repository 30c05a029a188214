//! Route definitions for the `/validation-queue` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::validation_queue;
use crate::state::AppState;

/// Routes mounted at `/validation-queue`.
///
/// ```text
/// GET    /      -> get_queue (?admin_email)
/// POST   /      -> add_to_queue (single or bulk)
/// DELETE /      -> remove_from_queue (single or bulk)
/// PATCH  /{id}  -> update_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(validation_queue::get_queue)
                .post(validation_queue::add_to_queue)
                .delete(validation_queue::remove_from_queue),
        )
        .route("/{id}", patch(validation_queue::update_entry))
}
