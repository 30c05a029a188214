//! Route definitions for the `/admin` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST  /register             -> register (public)
/// POST  /login                -> login (public)
/// PATCH /admins/{id}/status   -> update_account_status (super_admin)
/// GET   /actions              -> list_actions (super_admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(admin::register))
        .route("/login", post(admin::login))
        .route("/admins/{id}/status", patch(admin::update_account_status))
        .route("/actions", get(admin::list_actions))
}
