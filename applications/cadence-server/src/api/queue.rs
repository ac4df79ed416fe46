/// Queue preview and recently played API routes
use crate::{api::player::PlayResponse, error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use cadence_core::{Track, TrackId};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QueueResponse {
    pub queue: Vec<Track>,
}

#[derive(Debug, Serialize)]
pub struct RecentlyPlayedResponse {
    pub recently_played: Vec<Track>,
}

/// GET /api/queue - Upcoming tracks in playlist order
pub async fn get_queue(State(app_state): State<AppState>) -> Json<QueueResponse> {
    Json(QueueResponse {
        queue: app_state.controller.preview().await,
    })
}

/// GET /api/recently_played - History, most recent first
pub async fn recently_played(State(app_state): State<AppState>) -> Json<RecentlyPlayedResponse> {
    Json(RecentlyPlayedResponse {
        recently_played: app_state.controller.history().await,
    })
}

/// POST /api/recently_played/:id/play - Replay a track from history
pub async fn play_recent(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayResponse>> {
    let outcome = app_state
        .controller
        .play_from_history(&TrackId::new(id))
        .await?;
    Ok(Json(outcome.into()))
}
