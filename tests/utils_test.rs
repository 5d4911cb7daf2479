use playlist_relay::types::{CreatePlaylistBody, CreatePlaylistRequest, SearchQuery};
use playlist_relay::utils::*;

#[test]
fn test_basic_auth_header() {
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
    assert_eq!(basic_auth_header("abc", "s3cret"), "Basic YWJjOnMzY3JldA==");
}

#[test]
fn test_join_url() {
    assert_eq!(
        join_url("https://api.spotify.com/v1", "/me/playlists"),
        "https://api.spotify.com/v1/me/playlists"
    );
    assert_eq!(
        join_url("https://api.spotify.com/v1/", "/search"),
        "https://api.spotify.com/v1/search"
    );
    assert_eq!(
        join_url("https://api.spotify.com/v1", "playlists/p1"),
        "https://api.spotify.com/v1/playlists/p1"
    );
}

#[test]
fn test_create_request_minimal_body() {
    let request: CreatePlaylistRequest = serde_json::from_str(r#"{"name":"Mix"}"#).unwrap();

    assert!(!request.has_uris());
    assert!(request.playlist_id.is_none());

    let body = CreatePlaylistBody::from(&request);
    assert_eq!(body.name, "Mix");
    assert_eq!(body.description, "");
    assert!(body.public);
}

#[test]
fn test_create_request_nulls_behave_like_absent() {
    let request: CreatePlaylistRequest = serde_json::from_str(
        r#"{"name":"Mix","description":null,"public":null,"uris":null,"position":null}"#,
    )
    .unwrap();

    let body = CreatePlaylistBody::from(&request);
    assert_eq!(body.description, "");
    assert!(body.public);
    assert!(!request.has_uris());
}

#[test]
fn test_create_request_full() {
    let request: CreatePlaylistRequest = serde_json::from_str(
        r#"{"name":"Mix","description":"d","public":false,"uris":["spotify:track:1"],"position":2,"playlistId":"p1"}"#,
    )
    .unwrap();

    assert!(request.has_uris());
    assert_eq!(request.position, Some(2));
    assert_eq!(request.playlist_id.as_deref(), Some("p1"));

    let body = CreatePlaylistBody::from(&request);
    assert_eq!(body.description, "d");
    assert!(!body.public);
}

#[test]
fn test_create_request_requires_name() {
    assert!(serde_json::from_str::<CreatePlaylistRequest>(r#"{"description":"d"}"#).is_err());
}

#[test]
fn test_search_query_defaults() {
    let query = SearchQuery::default();
    assert_eq!(query.q, "");
    assert_eq!(query.kind, "album,playlist,artist,track");

    let query: SearchQuery = serde_json::from_str(r#"{"q":"daft punk"}"#).unwrap();
    assert_eq!(query.q, "daft punk");
    assert_eq!(query.kind, "album,playlist,artist,track");

    let query: SearchQuery = serde_json::from_str(r#"{"type":"track"}"#).unwrap();
    assert_eq!(query.q, "");
    assert_eq!(query.kind, "track");
}
