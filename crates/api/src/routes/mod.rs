pub mod admin;
pub mod auth;
pub mod health;
pub mod notifications;
pub mod submissions;
pub mod validation_queue;
pub mod web_data;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          user registration (public)
/// /auth/login                             user login (public)
///
/// /admin/register                         admin registration (public)
/// /admin/login                            admin login (public)
/// /admin/admins/{id}/status               account status change (super_admin)
/// /admin/actions                          action audit log (super_admin)
///
/// /submissions                            list (?user_email), create
/// /submissions/pending                    pending listing
/// /submissions/validated                  validated listing
/// /submissions/rejected                   rejected listing
/// /submissions/{id}                       get, delete (?user_email)
/// /submissions/{id}/submit                transition (tolerant upsert)
/// /submissions/{id}/validate              review decision
/// /submissions/{id}/reject                review decision
/// /submissions/{id}/preview               resolved preview
/// /submissions/{id}/comments              thread list, create
/// /submissions/{id}/comments/{comment_id} update, delete
///
/// /validation-queue                       list (?admin_email), add, remove
/// /validation-queue/{id}                  entry status update (PATCH)
///
/// /notifications                          list (?user_email, ?count_only),
///                                         create, mark read (PATCH),
///                                         delete (DELETE)
///
/// /web-data/{id}/preview                  document preview
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Contributor accounts.
        .nest("/auth", auth::router())
        // Admin accounts, status management, audit log.
        .nest("/admin", admin::router())
        // Submission lifecycle, previews, and comment threads.
        .nest("/submissions", submissions::router())
        // Per-admin review worklist.
        .nest("/validation-queue", validation_queue::router())
        // Per-user inbox.
        .nest("/notifications", notifications::router())
        // Document previews addressed by submission id.
        .nest("/web-data", web_data::router())
}
