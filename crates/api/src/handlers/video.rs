//! Handlers for the `/videos` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use placemark_core::error::CoreError;
use placemark_core::types::DbId;
use placemark_db::models::video::{CreateVideo, UpdateVideo, Video};
use placemark_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /videos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<(StatusCode, Json<Video>)> {
    let video = VideoRepo::create(&state.pool, &input).await?;

    tracing::info!(video_id = video.id, "Video created");

    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /videos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Video>>> {
    let videos = VideoRepo::list(&state.pool).await?;
    Ok(Json(videos))
}

/// GET /videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Video>> {
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }))?;
    Ok(Json(video))
}

/// PUT /videos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideo>,
) -> AppResult<Json<Video>> {
    let video = VideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }))?;

    tracing::info!(video_id = video.id, "Video updated");

    Ok(Json(video))
}

/// DELETE /videos/{id}
///
/// Responds with the video as it existed immediately before removal.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Video>> {
    let video = VideoRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }))?;

    tracing::info!(video_id = video.id, "Video deleted");

    Ok(Json(video))
}
