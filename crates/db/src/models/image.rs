//! Image model.

use placemark_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Image {
    pub id: DbId,
    pub filename: String,
    pub url: String,
}

/// DTO for creating a new image. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateImage {
    pub filename: String,
    pub url: String,
}

/// DTO for replacing an image via `PUT`. All non-id fields are overwritten.
#[derive(Debug, Deserialize)]
pub struct UpdateImage {
    pub filename: String,
    pub url: String,
}
