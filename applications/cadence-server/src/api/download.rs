/// Download API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use cadence_core::Track;
use cadence_playback::PlaybackError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub download_url: String,
}

/// GET /api/download/:index - MP3 link for the track at `index`
pub async fn download(
    State(app_state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<DownloadResponse>> {
    let reference = app_state.controller.download(index).await?;
    Ok(Json(DownloadResponse {
        download_url: reference.as_str().to_string(),
    }))
}

/// GET /api/download - MP3 link for the current track
pub async fn download_current(
    State(app_state): State<AppState>,
) -> Result<Json<DownloadResponse>> {
    let reference = app_state.controller.download_current().await?;
    Ok(Json(DownloadResponse {
        download_url: reference.as_str().to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct LinkQuery {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub status: bool,
    pub download_url: String,
}

/// GET /api/download_mp3?url= - MP3 link for any video URL
///
/// The playlist and history are left alone.
pub async fn download_mp3(
    State(app_state): State<AppState>,
    Query(params): Query<LinkQuery>,
) -> Result<Json<LinkResponse>> {
    let url = params
        .url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ServerError::BadRequest("url is required".to_string()))?;

    let track = Track::new(url.clone(), url.clone()).with_source_url(url);
    let reference = app_state
        .downloads
        .resolve_download(&track)
        .await
        .map_err(PlaybackError::from)?;

    Ok(Json(LinkResponse {
        status: true,
        download_url: reference.as_str().to_string(),
    }))
}
