mod common;

use common::Upstream;
use playlist_relay::{error::ApiError, management::TokenStore, spotify::SpotifyClient};
use reqwest::Client;
use serde_json::json;

async fn authenticated_client(upstream: &Upstream) -> SpotifyClient {
    let tokens = TokenStore::new();
    tokens.set("user-token".to_string(), "refresh".to_string()).await;
    SpotifyClient::new(Client::new(), upstream.config().api_url, tokens)
}

#[tokio::test]
async fn test_calls_without_token_never_reach_network() {
    let upstream = Upstream::start().await;
    let client = SpotifyClient::new(Client::new(), upstream.config().api_url, TokenStore::new());

    let get = client.get("/me/playlists", &[]).await;
    let post = client.post("/me/playlists", &json!({ "name": "x" })).await;

    assert!(matches!(get, Err(ApiError::Unauthenticated)));
    assert!(matches!(post, Err(ApiError::Unauthenticated)));
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn test_get_sends_bearer_token_and_query() {
    let upstream = Upstream::start().await;
    upstream.respond("GET", "/v1/search", 200, Some(json!({ "tracks": { "items": [] } })));
    let client = authenticated_client(&upstream).await;

    let result = client
        .get("/search", &[("q", "daft punk"), ("type", "album")])
        .await
        .unwrap();

    assert_eq!(result, json!({ "tracks": { "items": [] } }));
    let calls = upstream.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer user-token"));
    assert_eq!(calls[0].query["q"], "daft punk");
    assert_eq!(calls[0].query["type"], "album");
}

#[tokio::test]
async fn test_get_error_carries_status_and_body() {
    let upstream = Upstream::start().await;
    upstream.respond(
        "GET",
        "/v1/playlists/missing",
        404,
        Some(json!({ "error": { "status": 404, "message": "Resource not found" } })),
    );
    let client = authenticated_client(&upstream).await;

    let err = client.get("/playlists/missing", &[]).await.unwrap_err();

    match err {
        ApiError::UpstreamApi { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Resource not found"));
        }
        other => panic!("expected UpstreamApi, got {:?}", other),
    }
}

#[tokio::test]
async fn test_post_no_content_is_null_result() {
    let upstream = Upstream::start().await;
    upstream.respond("POST", "/v1/playlists/p1/items", 204, None);
    let client = authenticated_client(&upstream).await;

    let result = client
        .post("/playlists/p1/items", &json!({ "uris": ["spotify:track:1"] }))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let upstream = Upstream::start().await;
    upstream.respond("POST", "/v1/me/playlists", 201, Some(json!({ "id": "p1" })));
    let client = authenticated_client(&upstream).await;

    let result = client
        .post("/me/playlists", &json!({ "name": "Mix" }))
        .await
        .unwrap();

    assert_eq!(result, Some(json!({ "id": "p1" })));
    let calls = upstream.calls();
    assert_eq!(calls[0].json(), json!({ "name": "Mix" }));
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer user-token"));
}

#[tokio::test]
async fn test_post_error_status_fails() {
    let upstream = Upstream::start().await;
    upstream.respond(
        "POST",
        "/v1/me/playlists",
        403,
        Some(json!({ "error": { "status": 403, "message": "Insufficient client scope" } })),
    );
    let client = authenticated_client(&upstream).await;

    let err = client
        .post("/me/playlists", &json!({ "name": "Mix" }))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UpstreamApi { status: 403, .. }));
}
