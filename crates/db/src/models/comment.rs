//! Comment-thread entity models and DTOs.

use commhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table. `parent_comment_id` is a
/// self-reference; replies cascade with their parent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub submission_id: String,
    pub author_email: String,
    pub author_type: String,
    pub text: String,
    pub parent_comment_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a comment on a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub author_email: String,
    pub author_type: String,
    pub text: String,
    pub parent_comment_id: Option<DbId>,
}
