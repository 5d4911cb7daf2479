use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

/// Errors raised while handling a relayed request.
///
/// None of these are recovered locally. The route layer turns each into an
/// HTTP response, carrying the upstream status and body where there is one.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No token pair has been stored yet.
    #[error("not authenticated, log in via /api/auth/login first")]
    Unauthenticated,

    /// The authorization server redirected back without a code.
    #[error("authorization callback without code: {reason}")]
    MissingCode { reason: String },

    /// A playlist id that is not a single base62 path segment.
    #[error("invalid playlist id: {0:?}")]
    InvalidPlaylistId(String),

    /// The code-for-token exchange returned a non-2xx status.
    #[error("token exchange failed status={status}")]
    UpstreamAuth { status: u16, body: String },

    /// A proxied Web API call returned a non-2xx, non-204 status.
    #[error("upstream request failed status={status}")]
    UpstreamApi { status: u16, body: String },

    /// The upstream answered 2xx with a body we cannot work with.
    #[error("unexpected upstream response: {0}")]
    InvalidResponse(String),

    /// Transport or decoding failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::MissingCode { .. } | ApiError::InvalidPlaylistId(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UpstreamAuth { status, .. } | ApiError::UpstreamApi { status, .. } => {
                upstream_status(*status)
            }
            ApiError::InvalidResponse(_) | ApiError::Http(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// Upstream statuses are relayed as-is; anything that is not an error status
// would make the relayed response look successful, so it becomes 502.
fn upstream_status(status: u16) -> StatusCode {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_client_error() || code.is_server_error() => code,
        _ => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::UpstreamApi { body, .. } => match serde_json::from_str::<Value>(body) {
                Ok(upstream) => upstream,
                Err(_) => error_body(status, body),
            },
            ApiError::UpstreamAuth { body, .. } => {
                error_body(status, &format!("{}: {}", self, body))
            }
            _ => error_body(status, &self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

fn error_body(status: StatusCode, message: &str) -> Value {
    json!({
        "error": {
            "status": status.as_u16(),
            "message": message,
        }
    })
}
