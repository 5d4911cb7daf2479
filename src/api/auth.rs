use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{error::ApiError, info, server::AppState, types::CallbackQuery};

pub async fn login(State(state): State<AppState>) -> Response {
    info!("Redirecting to Spotify authorization");
    found(state.auth.login())
}

pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackQuery>,
) -> Result<Response, ApiError> {
    let Some(code) = params.code else {
        return Err(ApiError::MissingCode {
            reason: params.error.unwrap_or_else(|| "missing code".to_string()),
        });
    };

    let target = state.auth.callback(&code).await?;
    Ok(found(target))
}

fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
