//! Submission entity models and DTOs.

use commhub_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `submissions` table. The id is client-generated text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: String,
    pub user_email: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub status: String,
    pub preview: Option<String>,
    pub rejection_reason: Option<String>,
    pub rejection_feedback: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmission {
    pub id: String,
    pub user_email: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub status: Option<String>,
    pub preview: Option<String>,
}
