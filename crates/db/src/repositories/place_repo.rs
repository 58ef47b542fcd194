//! Repository for the `places` table.

use placemark_core::types::DbId;
use sqlx::PgPool;

use crate::models::place::{CreatePlace, Place, UpdatePlace};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location";

/// Provides CRUD operations for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a new place, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (name, location)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// List all places, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places ORDER BY id ASC");
        sqlx::query_as::<_, Place>(&query).fetch_all(pool).await
    }

    /// Find a place by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace all non-id fields of a place.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlace,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET name = $2, location = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Delete a place by ID, returning the row as it existed before
    /// removal. Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("DELETE FROM places WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
