use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARCH_TYPE: &str = "album,playlist,artist,track";

/// Access/refresh token pair, also the part of the token endpoint response
/// that is kept. Other response fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Inbound body of `POST /api/playlist/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub uris: Option<Vec<String>>,
    #[serde(default)]
    pub position: Option<u32>,
    /// Filled in once the playlist exists upstream.
    #[serde(default, rename = "playlistId")]
    pub playlist_id: Option<String>,
}

impl CreatePlaylistRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            public: None,
            uris: None,
            position: None,
            playlist_id: None,
        }
    }

    pub fn has_uris(&self) -> bool {
        self.uris.as_ref().is_some_and(|uris| !uris.is_empty())
    }
}

/// Body sent to `POST /me/playlists`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistBody {
    pub name: String,
    pub description: String,
    pub public: bool,
}

impl From<&CreatePlaylistRequest> for CreatePlaylistBody {
    fn from(request: &CreatePlaylistRequest) -> Self {
        Self {
            name: request.name.clone(),
            description: request.description.clone().unwrap_or_default(),
            public: request.public.unwrap_or(true),
        }
    }
}

/// Body sent to `POST /playlists/{id}/items`.
#[derive(Debug, Clone, Serialize)]
pub struct AddItemsToPlaylistBody {
    pub uris: Vec<String>,
    pub position: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_search_type", rename = "type")]
    pub kind: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            kind: default_search_type(),
        }
    }
}

fn default_search_type() -> String {
    DEFAULT_SEARCH_TYPE.to_string()
}
