use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::{error::ApiError, management::TokenStore, utils, warning};

/// Authenticated client for the Spotify Web API.
///
/// Every request carries the user's access token from the [`TokenStore`] as a
/// bearer token. Without a stored token no request is sent at all.
///
/// No retries and no rate-limit handling: non-2xx responses surface as
/// [`ApiError::UpstreamApi`] with the upstream status and raw body.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    tokens: TokenStore,
}

impl SpotifyClient {
    pub fn new(http: Client, base_url: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            tokens,
        }
    }

    /// `GET {base_url}{path}` with `params` as query string.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Unauthenticated`] if no token is stored
    /// - [`ApiError::UpstreamApi`] on any non-2xx status
    /// - [`ApiError::Http`] on transport or JSON decoding failure
    ///
    /// # Example
    ///
    /// ```
    /// let results = client.get("/search", &[("q", "daft punk"), ("type", "album")]).await?;
    /// ```
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let mut request = self.http.get(self.url(path));
        if !params.is_empty() {
            request = request.query(params);
        }

        let res = self.send(request, path).await?;
        Ok(res.json::<Value>().await?)
    }

    /// `POST {base_url}{path}` with a JSON body.
    ///
    /// Returns `None` when the upstream answers `204 No Content`.
    ///
    /// # Errors
    ///
    /// Same as [`SpotifyClient::get`].
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Option<Value>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.url(path)).json(body);

        let res = self.send(request, path).await?;
        if res.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        Ok(Some(res.json::<Value>().await?))
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        let token = self.tokens.get().await?;
        let res = request.bearer_auth(token).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warning!("Spotify API returned {} for {}", status, path);
            return Err(ApiError::UpstreamApi {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res)
    }

    fn url(&self, path: &str) -> String {
        utils::join_url(&self.base_url, path)
    }
}
