//! Video model.

use placemark_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Video {
    pub id: DbId,
    pub filename: String,
    pub url: String,
}

/// DTO for creating a new video. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateVideo {
    pub filename: String,
    pub url: String,
}

/// DTO for replacing a video via `PUT`. All non-id fields are overwritten.
#[derive(Debug, Deserialize)]
pub struct UpdateVideo {
    pub filename: String,
    pub url: String,
}
