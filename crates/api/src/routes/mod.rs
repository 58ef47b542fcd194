//! Route definitions.
//!
//! Each resource gets a submodule whose `router()` wires the five CRUD
//! routes for that entity; [`api_routes`] mounts them at the root (the
//! service has no path prefix).

pub mod category;
pub mod health;
pub mod image;
pub mod place;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /categories          POST create, GET list
/// /categories/{id}     GET get_by_id, PUT update, DELETE delete
/// /places[/{id}]       (same five operations)
/// /images[/{id}]       (same five operations)
/// /videos[/{id}]       (same five operations)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/places", place::router())
        .nest("/images", image::router())
        .nest("/videos", video::router())
}
