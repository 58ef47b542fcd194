//! Repository for the `images` table.

use placemark_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::{CreateImage, Image, UpdateImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, filename, url";

/// Provides CRUD operations for images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (filename, url)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(&input.filename)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// List all images, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images ORDER BY id ASC");
        sqlx::query_as::<_, Image>(&query).fetch_all(pool).await
    }

    /// Find an image by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace all non-id fields of an image.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateImage,
    ) -> Result<Option<Image>, sqlx::Error> {
        let query = format!(
            "UPDATE images SET filename = $2, url = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .bind(&input.filename)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an image by ID, returning the row as it existed before
    /// removal. Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("DELETE FROM images WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
