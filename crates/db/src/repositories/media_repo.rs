//! Repository for the per-type media metadata tables.
//!
//! The four tables (`image_metadata`, `video_metadata`, `audio_metadata`,
//! `web_data`) share the `submission_id` + `preview` + `mime_type` shape
//! the preview lookup needs, so queries dispatch on the submission's file
//! type.

use commhub_core::status::{FILE_AUDIO, FILE_DOCUMENT, FILE_IMAGE, FILE_VIDEO};
use sqlx::PgPool;

use crate::models::media::StoredPreview;

/// The metadata table backing a given file type.
fn table_for(file_type: &str) -> Option<&'static str> {
    match file_type {
        FILE_IMAGE => Some("image_metadata"),
        FILE_VIDEO => Some("video_metadata"),
        FILE_AUDIO => Some("audio_metadata"),
        FILE_DOCUMENT => Some("web_data"),
        _ => None,
    }
}

/// Provides preview storage and lookup across the media metadata tables.
pub struct MediaRepo;

impl MediaRepo {
    /// Store an inline preview for a submission in the table matching its
    /// file type.
    ///
    /// Unknown file types are ignored: the submission row itself still
    /// carries the inline preview as a fallback.
    pub async fn create_preview(
        pool: &PgPool,
        submission_id: &str,
        file_type: &str,
        preview: &str,
        mime_type: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        let Some(table) = table_for(file_type) else {
            return Ok(());
        };
        let query = format!(
            "INSERT INTO {table} (submission_id, preview, mime_type) VALUES ($1, $2, $3)"
        );
        sqlx::query(&query)
            .bind(submission_id)
            .bind(preview)
            .bind(mime_type)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Look up the stored preview for a submission in the table matching
    /// its file type. Newest row wins when several exist.
    pub async fn find_preview(
        pool: &PgPool,
        submission_id: &str,
        file_type: &str,
    ) -> Result<Option<StoredPreview>, sqlx::Error> {
        let Some(table) = table_for(file_type) else {
            return Ok(None);
        };
        let query = format!(
            "SELECT preview, mime_type FROM {table}
             WHERE submission_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, StoredPreview>(&query)
            .bind(submission_id)
            .fetch_optional(pool)
            .await
    }

    /// Count metadata rows for a submission across all four tables.
    /// Used by tests to verify cascade deletes.
    pub async fn count_for_submission(
        pool: &PgPool,
        submission_id: &str,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT
                (SELECT COUNT(*) FROM image_metadata WHERE submission_id = $1)
              + (SELECT COUNT(*) FROM video_metadata WHERE submission_id = $1)
              + (SELECT COUNT(*) FROM audio_metadata WHERE submission_id = $1)
              + (SELECT COUNT(*) FROM web_data WHERE submission_id = $1)",
        )
        .bind(submission_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
