//! Notification entity models and DTOs.

use commhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_email: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub action_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotification {
    pub user_email: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub action_url: Option<String>,
}
