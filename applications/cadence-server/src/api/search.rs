/// Search API routes
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use cadence_core::Track;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: bool,
    pub data: Vec<Track>,
}

/// GET /api/search?query= - Search and replace the playlist
///
/// Without a query the configured default search runs. Failures and empty
/// pages both answer `status: false` with no data; the playlist is kept.
pub async fn search(
    State(app_state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let query = params
        .query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| app_state.config.player.default_search.clone());

    let data = app_state.controller.search(&query).await;

    Json(SearchResponse {
        status: !data.is_empty(),
        data,
    })
}
