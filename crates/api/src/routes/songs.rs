//! Song endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use validator::Validate;

use domain::models::song::{CreateSongRequest, ListSongsQuery, ListSongsResponse};
use domain::services::CreatedResponse;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::record_created;

/// List songs, optionally only one category.
///
/// GET /api/v1/songs?category=live
pub async fn list_songs(
    State(state): State<AppState>,
    Query(query): Query<ListSongsQuery>,
) -> Result<Json<ListSongsResponse>, ApiError> {
    let songs = match query.category.as_deref() {
        Some(category) => state.store.songs_by_category(category).await?,
        None => state.store.list_songs().await?,
    };
    let total = songs.len();
    Ok(Json(ListSongsResponse { songs, total }))
}

/// Create a song.
///
/// POST /api/v1/songs
pub async fn create_song(
    State(state): State<AppState>,
    Json(request): Json<CreateSongRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;

    let category = request.category;
    let id = state.store.create_song(request).await?;
    record_created("songs");
    info!(song_id = %id, category = category.as_str(), "Song created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
