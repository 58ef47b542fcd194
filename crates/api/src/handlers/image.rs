//! Handlers for the `/images` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use placemark_core::error::CoreError;
use placemark_core::types::DbId;
use placemark_db::models::image::{CreateImage, Image, UpdateImage};
use placemark_db::repositories::ImageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /images
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateImage>,
) -> AppResult<(StatusCode, Json<Image>)> {
    let image = ImageRepo::create(&state.pool, &input).await?;

    tracing::info!(image_id = image.id, "Image created");

    Ok((StatusCode::CREATED, Json(image)))
}

/// GET /images
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Image>>> {
    let images = ImageRepo::list(&state.pool).await?;
    Ok(Json(images))
}

/// GET /images/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Image>> {
    let image = ImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id,
        }))?;
    Ok(Json(image))
}

/// PUT /images/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateImage>,
) -> AppResult<Json<Image>> {
    let image = ImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id,
        }))?;

    tracing::info!(image_id = image.id, "Image updated");

    Ok(Json(image))
}

/// DELETE /images/{id}
///
/// Responds with the image as it existed immediately before removal.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Image>> {
    let image = ImageRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id,
        }))?;

    tracing::info!(image_id = image.id, "Image deleted");

    Ok(Json(image))
}
