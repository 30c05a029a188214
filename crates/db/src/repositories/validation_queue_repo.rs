//! Repository for the `validation_queue` table.

use commhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::validation_queue::{QueueEntry, QueueEntryWithSubmission};

/// Column list for validation_queue queries.
const COLUMNS: &str = "id, submission_id, admin_email, status, created_at, updated_at";

/// Provides assignment operations for the per-admin review worklist.
pub struct ValidationQueueRepo;

impl ValidationQueueRepo {
    /// Assign a submission to an admin.
    ///
    /// The (submission, admin) pair is unique; a duplicate add is a no-op
    /// and returns `None`, which callers treat as "already queued" rather
    /// than a failure.
    pub async fn add(
        pool: &PgPool,
        submission_id: &str,
        admin_email: &str,
    ) -> Result<Option<QueueEntry>, sqlx::Error> {
        let query = format!(
            "INSERT INTO validation_queue (submission_id, admin_email)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_validation_queue_submission_admin DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueueEntry>(&query)
            .bind(submission_id)
            .bind(admin_email)
            .fetch_optional(pool)
            .await
    }

    /// Remove a submission from an admin's queue.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn remove(
        pool: &PgPool,
        submission_id: &str,
        admin_email: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM validation_queue WHERE submission_id = $1 AND admin_email = $2")
                .bind(submission_id)
                .bind(admin_email)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List an admin's queue entries joined with their submissions, oldest
    /// assignment first.
    pub async fn list_for_admin(
        pool: &PgPool,
        admin_email: &str,
    ) -> Result<Vec<QueueEntryWithSubmission>, sqlx::Error> {
        sqlx::query_as::<_, QueueEntryWithSubmission>(
            "SELECT
                q.id, q.submission_id, q.admin_email, q.status, q.created_at, q.updated_at,
                s.user_email, s.file_name, s.file_type, s.file_size,
                s.status AS submission_status
             FROM validation_queue q
             INNER JOIN submissions s ON s.id = q.submission_id
             WHERE q.admin_email = $1
             ORDER BY q.created_at ASC",
        )
        .bind(admin_email)
        .fetch_all(pool)
        .await
    }

    /// Overwrite a queue entry's status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<QueueEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE validation_queue SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueueEntry>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Count queue entries for a (submission, admin) pair. Used by tests
    /// to verify the uniqueness invariant.
    pub async fn count_pair(
        pool: &PgPool,
        submission_id: &str,
        admin_email: &str,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM validation_queue WHERE submission_id = $1 AND admin_email = $2",
        )
        .bind(submission_id)
        .bind(admin_email)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
