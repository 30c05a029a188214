//! Administrator account models and DTOs.

use commhub_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `admins` table.
///
/// Like [`super::user::User`], not `Serialize` so the password hash
/// cannot leak into a response body.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: String,
    pub country: Option<String>,
    pub account_status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new admin. `password_hash` is already hashed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdmin {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: String,
    pub country: Option<String>,
    pub account_status: String,
}
