//! Configuration management for the playlist relay.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. Resolution order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the working directory
//! 3. `.env` in the local data directory
//! 4. Application defaults (where applicable)
//!
//! [`Config`] is read once at startup and then handed to the components that
//! need it, so tests can build one directly without touching the environment.

use dotenv;
use std::{env, path::PathBuf};

pub const DEFAULT_ACCOUNT_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";

/// Loads environment variables from `.env` files.
///
/// The working directory is tried first, then `playlist-relay/.env` inside the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/playlist-relay/.env`
/// - macOS: `~/Library/Application Support/playlist-relay/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-relay/.env`
///
/// Variables already present in the environment are never overwritten. A
/// missing file is not an error; a file that exists but cannot be parsed is.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file is malformed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-relay/.env");
    path
}

/// Runtime configuration for the relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client id of the registered Spotify application.
    pub client_id: String,
    /// Client secret of the registered Spotify application. Only sent to the
    /// token endpoint.
    pub client_secret: String,
    /// Callback URL registered with Spotify, e.g. `http://127.0.0.1:8000/api/auth/callback`.
    pub redirect_uri: String,
    /// Base URL of the accounts service, without trailing slash.
    pub account_url: String,
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
    /// Where the browser goes after a successful login.
    pub client_url: String,
    /// Address the HTTP server binds to.
    pub server_addr: String,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// Required: `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`,
    /// `SPOTIFY_REDIRECT_URI`, `SPOTIFY_CLIENT_URL`.
    ///
    /// Optional: `SPOTIFY_ACCOUNT_URL`, `SPOTIFY_API_URL`, `SERVER_ADDRESS`.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the first missing required variable.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
            account_url: optional("SPOTIFY_ACCOUNT_URL", DEFAULT_ACCOUNT_URL),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL),
            client_url: required("SPOTIFY_CLIENT_URL")?,
            server_addr: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
        })
    }
}

fn required(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(format!("{} must be set", name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
