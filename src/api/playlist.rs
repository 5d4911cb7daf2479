use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{
    error::ApiError, info, server::AppState, spotify::playlist, types::CreatePlaylistRequest,
};

pub async fn my_playlists(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    info!("GET /api/playlist/me");
    Ok(Json(playlist::get_my_playlists(&state.spotify).await?))
}

pub async fn create_my_playlist(
    State(state): State<AppState>,
    Json(request): Json<CreatePlaylistRequest>,
) -> Result<Json<Value>, ApiError> {
    info!(
        "POST /api/playlist/me name={:?} tracks={}",
        request.name,
        request.uris.as_ref().map_or(0, Vec::len)
    );
    Ok(Json(playlist::create_playlist(&state.spotify, request).await?))
}

pub async fn playlist_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    info!("GET /api/playlist/{}", id);
    Ok(Json(playlist::get_playlist_by_id(&state.spotify, &id).await?))
}
