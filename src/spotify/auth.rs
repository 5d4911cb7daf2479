use reqwest::Client;

use crate::{
    config::Config, error::ApiError, management::TokenStore, success, types::TokenPair,
    utils, warning,
};

/// Permissions requested from the user: read private playlists, modify public
/// and private ones.
pub const SCOPE: &str = "playlist-read-private playlist-modify-public playlist-modify-private";

/// Builds the authorization URL the user is redirected to.
///
/// Pure function of the configuration. Client id, scope and redirect URI are
/// embedded verbatim.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config);
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{account_url}/authorize?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}",
        account_url = config.account_url,
        client_id = config.client_id,
        scope = SCOPE,
        redirect_uri = config.redirect_uri,
    )
}

/// The two-step OAuth authorization-code flow.
///
/// `login` hands out the authorization URL; `callback` trades the returned
/// code for a token pair and stores it.
#[derive(Debug, Clone)]
pub struct AuthFlow {
    http: Client,
    config: Config,
    tokens: TokenStore,
}

impl AuthFlow {
    pub fn new(http: Client, config: Config, tokens: TokenStore) -> Self {
        Self {
            http,
            config,
            tokens,
        }
    }

    /// Start of the flow: the URL to redirect the user to.
    pub fn login(&self) -> String {
        authorize_url(&self.config)
    }

    /// End of the flow: exchanges `code` for a token pair.
    ///
    /// On success the pair overwrites whatever the store held and the client
    /// application URL is returned as the redirect target.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UpstreamAuth`] if the token endpoint answers non-2xx. The
    ///   store is left untouched.
    /// - [`ApiError::InvalidResponse`] if a 2xx body lacks either token.
    /// - [`ApiError::Http`] on transport failure.
    pub async fn callback(&self, code: &str) -> Result<String, ApiError> {
        let token = exchange_code(&self.http, &self.config, code).await?;
        self.tokens.set(token.access_token, token.refresh_token).await;
        success!("Token pair stored");

        Ok(self.config.client_url.clone())
    }
}

/// Server-to-server code exchange against `{account_url}/api/token`.
///
/// Authenticates with HTTP Basic built from client id and secret. No retry.
pub async fn exchange_code(
    http: &Client,
    config: &Config,
    code: &str,
) -> Result<TokenPair, ApiError> {
    let res = http
        .post(format!("{}/api/token", config.account_url))
        .header(
            reqwest::header::AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        warning!("Token exchange failed with status {}", status);
        return Err(ApiError::UpstreamAuth {
            status: status.as_u16(),
            body,
        });
    }

    let body = res.bytes().await?;
    serde_json::from_slice::<TokenPair>(&body)
        .map_err(|e| ApiError::InvalidResponse(format!("token response: {}", e)))
}
