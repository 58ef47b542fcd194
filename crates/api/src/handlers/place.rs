//! Handlers for the `/places` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use placemark_core::error::CoreError;
use placemark_core::types::DbId;
use placemark_db::models::place::{CreatePlace, Place, UpdatePlace};
use placemark_db::repositories::PlaceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /places
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlace>,
) -> AppResult<(StatusCode, Json<Place>)> {
    let place = PlaceRepo::create(&state.pool, &input).await?;

    tracing::info!(place_id = place.id, "Place created");

    Ok((StatusCode::CREATED, Json(place)))
}

/// GET /places
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Place>>> {
    let places = PlaceRepo::list(&state.pool).await?;
    Ok(Json(places))
}

/// GET /places/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))?;
    Ok(Json(place))
}

/// PUT /places/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlace>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))?;

    tracing::info!(place_id = place.id, "Place updated");

    Ok(Json(place))
}

/// DELETE /places/{id}
///
/// Responds with the place as it existed immediately before removal.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))?;

    tracing::info!(place_id = place.id, "Place deleted");

    Ok(Json(place))
}
