#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use playlist_relay::config::Config;
use serde_json::{Value, json};

/// A request received by the stub.
#[derive(Debug, Clone)]
pub struct Call {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Call {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    routes: HashMap<(String, String), (u16, Option<Value>)>,
}

/// In-process stand-in for the Spotify accounts service and Web API.
///
/// Every request is recorded. Responses are looked up by method and path;
/// unknown routes answer 404.
#[derive(Clone, Default)]
pub struct Upstream {
    inner: Arc<Mutex<Inner>>,
    pub base_url: String,
}

impl Upstream {
    pub async fn start() -> Self {
        let mut upstream = Upstream::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        upstream.base_url = format!("http://{}", listener.local_addr().unwrap());

        let app = Router::new()
            .fallback(record)
            .with_state(upstream.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        upstream
    }

    /// Answers `method path` with `status` and a JSON body, or an empty body
    /// when `body` is `None`.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Option<Value>) {
        self.inner
            .lock()
            .unwrap()
            .routes
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// `"METHOD /path"` for every recorded call, in order.
    pub fn call_lines(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| format!("{} {}", call.method, call.path))
            .collect()
    }

    /// A configuration whose accounts service and Web API both point here.
    pub fn config(&self) -> Config {
        Config {
            client_id: "abc".to_string(),
            client_secret: "s3cret".to_string(),
            redirect_uri: "https://app/cb".to_string(),
            account_url: self.base_url.clone(),
            api_url: format!("{}/v1", self.base_url),
            client_url: "https://client.app/home".to_string(),
            server_addr: "127.0.0.1:0".to_string(),
        }
    }
}

async fn record(
    State(upstream): State<Upstream>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query = reqwest::Url::parse(&format!("http://stub{}", uri))
        .map(|url| url.query_pairs().into_owned().collect())
        .unwrap_or_default();

    let mut inner = upstream.inner.lock().unwrap();
    inner.calls.push(Call {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let key = (method.to_string(), uri.path().to_string());
    match inner.routes.get(&key).cloned() {
        Some((status, Some(body))) => (
            StatusCode::from_u16(status).unwrap(),
            axum::Json(body),
        )
            .into_response(),
        Some((status, None)) => StatusCode::from_u16(status).unwrap().into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": { "status": 404, "message": "Not found." } })),
        )
            .into_response(),
    }
}
