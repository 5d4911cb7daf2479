use serde_json::Value;

use crate::{
    error::ApiError,
    info,
    spotify::SpotifyClient,
    types::{AddItemsToPlaylistBody, CreatePlaylistBody, CreatePlaylistRequest},
};

/// Playlists owned or followed by the current user, as returned by Spotify.
pub async fn get_my_playlists(client: &SpotifyClient) -> Result<Value, ApiError> {
    client.get("/me/playlists", &[]).await
}

/// Full playlist object for `playlist_id`.
///
/// # Errors
///
/// [`ApiError::InvalidPlaylistId`] before any upstream call if the id is not
/// a Spotify (base62) id.
pub async fn get_playlist_by_id(client: &SpotifyClient, playlist_id: &str) -> Result<Value, ApiError> {
    client.get(&playlist_path(playlist_id, "")?, &[]).await
}

// The id becomes one path segment of the upstream URL, so anything that could
// leave that segment (`/`, `?`, `#`, `..`, escapes) is refused.
fn playlist_path(playlist_id: &str, suffix: &str) -> Result<String, ApiError> {
    if playlist_id.is_empty() || !playlist_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ApiError::InvalidPlaylistId(playlist_id.to_string()));
    }
    Ok(format!("/playlists/{}{}", playlist_id, suffix))
}

/// Creates a playlist for the current user and optionally fills it.
///
/// Without `uris` this is a single `POST /me/playlists` whose response is
/// returned unmodified. With `uris` three calls run in sequence:
/// 1. `POST /me/playlists`
/// 2. `POST /playlists/{id}/items` with the URIs at `position` (default 0)
/// 3. `GET /playlists/{id}`, whose result is returned
///
/// A failure in step 2 or 3 is returned as-is; the playlist created in step 1
/// stays in the user's library, empty.
///
/// # Errors
///
/// - Any error from the upstream client
/// - [`ApiError::InvalidResponse`] if step 1 yields no playlist `id` while
///   tracks still need inserting
pub async fn create_playlist(
    client: &SpotifyClient,
    mut request: CreatePlaylistRequest,
) -> Result<Value, ApiError> {
    let body = CreatePlaylistBody::from(&request);
    let created = client.post("/me/playlists", &body).await?;

    if !request.has_uris() {
        return Ok(created.unwrap_or(Value::Null));
    }

    let playlist_id = created
        .as_ref()
        .and_then(|playlist| playlist["id"].as_str())
        .map(str::to_string)
        .ok_or_else(|| ApiError::InvalidResponse("created playlist has no id".to_string()))?;
    info!("Playlist {} created, adding tracks", playlist_id);

    request.playlist_id = Some(playlist_id.clone());
    add_tracks_to_playlist(client, &request).await?;

    get_playlist_by_id(client, &playlist_id).await
}

/// Inserts `request.uris` into the playlist `request.playlist_id`.
///
/// Returns the upstream response, typically `{"snapshot_id": ...}`, or `None`
/// for an empty 204 answer.
pub async fn add_tracks_to_playlist(
    client: &SpotifyClient,
    request: &CreatePlaylistRequest,
) -> Result<Option<Value>, ApiError> {
    let playlist_id = request
        .playlist_id
        .as_deref()
        .ok_or_else(|| ApiError::InvalidResponse("playlist id not set".to_string()))?;

    let body = AddItemsToPlaylistBody {
        uris: request.uris.clone().unwrap_or_default(),
        position: request.position.unwrap_or(0),
    };
    client
        .post(&playlist_path(playlist_id, "/items")?, &body)
        .await
}
