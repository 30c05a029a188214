//! Admin-action audit models and DTOs. Records are append-only, so there
//! is no update DTO and no `updated_at`.

use commhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `admin_actions` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminAction {
    pub id: DbId,
    pub admin_email: String,
    pub action_type: String,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new audit entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdminAction {
    pub admin_email: String,
    pub action_type: String,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
