//! Storage layer: connection pool management, schema bootstrap, and
//! per-entity repositories.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
mod schema;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the entity tables if they do not exist yet.
///
/// Runs on every startup; the DDL is idempotent and there is no migration
/// versioning.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(schema::SCHEMA_SQL).execute(pool).await?;
    Ok(())
}
