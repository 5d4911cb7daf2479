use axum::{Router, routing::get};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr};

use crate::{
    Res, api,
    config::Config,
    info,
    management::TokenStore,
    spotify::{AuthFlow, SpotifyClient},
};

/// Shared handler state.
///
/// The auth flow and the upstream client hold handles to the same
/// [`TokenStore`] and share one connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub auth: AuthFlow,
    pub spotify: SpotifyClient,
    pub tokens: TokenStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_tokens(config, TokenStore::new())
    }

    pub fn with_tokens(config: Config, tokens: TokenStore) -> Self {
        let http = Client::new();
        let spotify = SpotifyClient::new(http.clone(), config.api_url.clone(), tokens.clone());
        let auth = AuthFlow::new(http, config, tokens.clone());

        Self {
            auth,
            spotify,
            tokens,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/auth/login", get(api::login))
        .route("/api/auth/callback", get(api::callback))
        .route(
            "/api/playlist/me",
            get(api::my_playlists).post(api::create_my_playlist),
        )
        .route("/api/playlist/{id}", get(api::playlist_by_id))
        .route("/api/search", get(api::search))
        .route("/api/search/", get(api::search))
        .with_state(state)
}

/// Binds `config.server_addr` and serves until the process is stopped.
///
/// # Errors
///
/// Fails if the address cannot be parsed or bound.
pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", config.server_addr, e))?;

    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    info!("Log in via http://{}/api/auth/login", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
