//! # Spotify Integration Module
//!
//! Everything that talks to Spotify lives here.
//!
//! ```text
//! Route Layer (crate::api)
//!          ↓
//! Domain Services (playlist, search)
//!          ↓
//! Upstream API Client (client)  ──reads──▶  TokenStore  ◀──writes──  AuthFlow (auth)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 authorization-code flow with a client
//! secret: the user is sent to the accounts service, comes back with a code,
//! and the code is exchanged server-to-server for an access/refresh token
//! pair. Tokens are neither refreshed nor persisted; a restart requires a new
//! login.
//!
//! ## Upstream client
//!
//! [`client`] attaches the stored access token to every call. Errors are not
//! retried or recovered; they reach the HTTP client with the upstream status.
//!
//! ## API Coverage
//!
//! - `GET /me/playlists` - current user's playlists
//! - `POST /me/playlists` - create a playlist
//! - `POST /playlists/{id}/items` - insert tracks
//! - `GET /playlists/{id}` - playlist details
//! - `GET /search` - catalog search
//! - `POST /api/token` (accounts service) - code exchange

pub mod auth;
pub mod client;
pub mod playlist;
pub mod search;

pub use auth::AuthFlow;
pub use client::SpotifyClient;
