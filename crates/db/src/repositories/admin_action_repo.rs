//! Repository for the append-only `admin_actions` audit table.

use sqlx::PgPool;

use crate::models::admin_action::{AdminAction, CreateAdminAction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, admin_email, action_type, target_type, target_id, description, \
    ip_address, user_agent, created_at";

/// Provides append and query operations for the audit trail.
pub struct AdminActionRepo;

impl AdminActionRepo {
    /// Append a new audit entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdminAction,
    ) -> Result<AdminAction, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_actions
                (admin_email, action_type, target_type, target_id, description,
                 ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminAction>(&query)
            .bind(&input.admin_email)
            .bind(&input.action_type)
            .bind(&input.target_type)
            .bind(&input.target_id)
            .bind(&input.description)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// List audit entries, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdminAction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_actions
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, AdminAction>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
