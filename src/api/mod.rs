//! # API Module
//!
//! HTTP handlers for the relay, built on [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - `GET /api/auth/login`, 302 to Spotify's authorization page
//! - [`callback`] - `GET /api/auth/callback?code=`, exchanges the code and
//!   302s to the client application
//!
//! ### Playlists
//!
//! - [`my_playlists`] - `GET /api/playlist/me`
//! - [`create_my_playlist`] - `POST /api/playlist/me`
//! - [`playlist_by_id`] - `GET /api/playlist/{id}`
//!
//! ### Search
//!
//! - [`search`] - `GET /api/search?q=&type=`
//!
//! ### Monitoring
//!
//! - [`health`] - status, version and whether a token is stored
//!
//! Handlers return [`crate::error::ApiError`] on failure, which renders the
//! upstream status and body where there is one.

mod auth;
mod health;
mod playlist;
mod search;

pub use auth::{callback, login};
pub use health::health;
pub use playlist::{create_my_playlist, my_playlists, playlist_by_id};
pub use search::search;
