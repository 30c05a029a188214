//! Repository for the `comments` table.

use commhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, submission_id, author_email, author_type, text, parent_comment_id, created_at, updated_at";

/// Provides CRUD operations for comment threads.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment on a submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        submission_id: &str,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (submission_id, author_email, author_type, text, parent_comment_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(submission_id)
            .bind(&input.author_email)
            .bind(&input.author_type)
            .bind(&input.text)
            .bind(input.parent_comment_id)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full thread for a submission in insertion order.
    pub async fn list_for_submission(
        pool: &PgPool,
        submission_id: &str,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE submission_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(submission_id)
            .fetch_all(pool)
            .await
    }

    /// Update a comment's text, but only when `author_email` matches the
    /// original author.
    ///
    /// Returns `None` when the comment does not exist or the author does
    /// not match; callers cannot tell the two apart.
    pub async fn update_text(
        pool: &PgPool,
        id: DbId,
        author_email: &str,
        text: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET text = $3, updated_at = NOW()
             WHERE id = $1 AND author_email = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(author_email)
            .bind(text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID regardless of author. Replies cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a comment only if `author_email` wrote it. Replies cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        author_email: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND author_email = $2")
            .bind(id)
            .bind(author_email)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
