//! Validation-queue entity models.

use commhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `validation_queue` table. Unique per
/// (submission, admin) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueueEntry {
    pub id: DbId,
    pub submission_id: String,
    pub admin_email: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A queue entry joined with its submission, as served to the admin
/// worklist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueueEntryWithSubmission {
    pub id: DbId,
    pub submission_id: String,
    pub admin_email: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_email: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub submission_status: String,
}
