//! Place model.

use placemark_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `places` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub location: Option<String>,
}

/// DTO for creating a new place.
#[derive(Debug, Deserialize)]
pub struct CreatePlace {
    pub name: String,
    pub location: Option<String>,
}

/// DTO for replacing a place via `PUT`.
///
/// All non-id fields are overwritten; an omitted `location` clears the
/// column.
#[derive(Debug, Deserialize)]
pub struct UpdatePlace {
    pub name: String,
    pub location: Option<String>,
}
