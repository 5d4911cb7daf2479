use serde_json::Value;

use crate::{error::ApiError, spotify::SpotifyClient, types::DEFAULT_SEARCH_TYPE};

/// Searches the catalog.
///
/// `kind` is a comma separated list of resource types; an empty value falls
/// back to `album,playlist,artist,track`. An empty `q` is forwarded as-is.
pub async fn search(client: &SpotifyClient, q: &str, kind: &str) -> Result<Value, ApiError> {
    let kind = if kind.trim().is_empty() {
        DEFAULT_SEARCH_TYPE
    } else {
        kind
    };

    client.get("/search", &[("q", q), ("type", kind)]).await
}
