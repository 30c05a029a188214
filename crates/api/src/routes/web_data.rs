//! Route definitions for the `/web-data` resource (document previews).

use axum::routing::get;
use axum::Router;

use crate::handlers::preview;
use crate::state::AppState;

/// Routes mounted at `/web-data`.
///
/// ```text
/// GET /{id}/preview -> get_web_data_preview
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/preview", get(preview::get_web_data_preview))
}
