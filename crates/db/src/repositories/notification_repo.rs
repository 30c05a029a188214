//! Repository for the `notifications` table.
//!
//! Every mutating query is scoped to the owning user email, so a caller
//! holding someone else's notification id simply affects zero rows.

use commhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_email, kind, title, message, is_read, action_url, created_at, updated_at";

/// Provides CRUD operations for the per-user notification inbox.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create a notification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (user_email, kind, title, message, action_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&input.user_email)
            .bind(&input.kind)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.action_url)
            .fetch_one(pool)
            .await
    }

    /// List notifications for a user, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_email: &str,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_email = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_email)
            .fetch_all(pool)
            .await
    }

    /// Get the number of unread notifications for a user.
    pub async fn unread_count(pool: &PgPool, user_email: &str) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_email = $1 AND is_read = false",
        )
        .bind(user_email)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Mark a single notification as read.
    ///
    /// Returns `true` if the notification was found for the given user and
    /// updated, `false` otherwise.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
        user_email: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications
             SET is_read = true, updated_at = NOW()
             WHERE id = $1 AND user_email = $2 AND is_read = false",
        )
        .bind(id)
        .bind(user_email)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all unread notifications as read for a user.
    ///
    /// Returns the number of notifications that were marked read.
    pub async fn mark_all_read(pool: &PgPool, user_email: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications
             SET is_read = true, updated_at = NOW()
             WHERE user_email = $1 AND is_read = false",
        )
        .bind(user_email)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a single notification owned by the given user.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_email: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_email = $2")
            .bind(id)
            .bind(user_email)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all notifications for a user.
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_all(pool: &PgPool, user_email: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE user_email = $1")
            .bind(user_email)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
