//! Repository for the `submissions` table.

use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_email, file_name, file_type, file_size, status, preview, \
    rejection_reason, rejection_feedback, created_at, updated_at";

/// Provides CRUD and status-transition operations for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission with its caller-supplied id, returning the
    /// created row.
    ///
    /// There is no uniqueness pre-check: a duplicate id surfaces as a
    /// primary-key violation from the store.
    pub async fn create(pool: &PgPool, input: &CreateSubmission) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (id, user_email, file_name, file_type, file_size, status, preview)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'pending'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.id)
            .bind(&input.user_email)
            .bind(&input.file_name)
            .bind(&input.file_type)
            .bind(input.file_size)
            .bind(&input.status)
            .bind(&input.preview)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all submissions owned by a user, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_email: &str,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE user_email = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(user_email)
            .fetch_all(pool)
            .await
    }

    /// List all submissions in a given status, newest first.
    pub async fn list_by_status(
        pool: &PgPool,
        status: &str,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE status = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a submission's status, leaving the rejection fields
    /// untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: &str,
        status: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Move a submission to `rejected`, overwriting the rejection reason
    /// and feedback.
    pub async fn reject(
        pool: &PgPool,
        id: &str,
        rejection_reason: Option<&str>,
        rejection_feedback: Option<&str>,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET
                status = 'rejected',
                rejection_reason = $2,
                rejection_feedback = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(rejection_reason)
            .bind(rejection_feedback)
            .fetch_optional(pool)
            .await
    }

    /// Delete a submission owned by the given user. Media metadata and
    /// comments cascade with it.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_owned(
        pool: &PgPool,
        id: &str,
        user_email: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = $1 AND user_email = $2")
            .bind(id)
            .bind(user_email)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
