//! Per-type media metadata models.
//!
//! One row per submission of matching type, cascade-deleted with it.

use commhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `image_metadata` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImageMetadata {
    pub id: DbId,
    pub submission_id: String,
    pub preview: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub mime_type: Option<String>,
    pub extension: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `video_metadata` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoMetadata {
    pub id: DbId,
    pub submission_id: String,
    pub preview: Option<String>,
    pub duration_secs: Option<f64>,
    pub mime_type: Option<String>,
    pub extension: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `audio_metadata` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AudioMetadata {
    pub id: DbId,
    pub submission_id: String,
    pub preview: Option<String>,
    pub duration_secs: Option<f64>,
    pub mime_type: Option<String>,
    pub extension: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `web_data` table (document previews).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WebData {
    pub id: DbId,
    pub submission_id: String,
    pub preview: Option<String>,
    pub mime_type: Option<String>,
    pub created_at: Timestamp,
}

/// Projection shared by all preview lookups: the inline payload and the
/// MIME type stored alongside it, either of which may be absent.
#[derive(Debug, Clone, FromRow)]
pub struct StoredPreview {
    pub preview: Option<String>,
    pub mime_type: Option<String>,
}
