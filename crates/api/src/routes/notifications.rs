//! Route definitions for the `/notifications` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    / -> list_notifications (?user_email, ?count_only)
/// POST   / -> create_notification
/// PATCH  / -> mark_read (id or mark_all)
/// DELETE / -> delete_notifications (id or delete_all)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(notification::list_notifications)
            .post(notification::create_notification)
            .patch(notification::mark_read)
            .delete(notification::delete_notifications),
    )
}
