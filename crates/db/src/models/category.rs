//! Category model.

use placemark_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for replacing a category via `PUT`.
///
/// All non-id fields are overwritten; an omitted `description` clears the
/// column.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub description: Option<String>,
}
