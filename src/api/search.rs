use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;

use crate::{error::ApiError, info, server::AppState, spotify, types::SearchQuery};

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    info!("GET /api/search q={:?} type={:?}", query.q, query.kind);
    Ok(Json(
        spotify::search::search(&state.spotify, &query.q, &query.kind).await?,
    ))
}
