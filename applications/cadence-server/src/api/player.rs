/// Player control API routes
use crate::{
    error::{Result, ServerError},
    output::SessionView,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cadence_core::Track;
use cadence_playback::{PlayOutcome, PlaybackState, PlayerSnapshot};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct StateResponse {
    #[serde(flatten)]
    pub player: PlayerSnapshot,
    pub session: SessionView,
}

/// Result of anything that starts a track
#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub status: bool,
    /// A newer request took over while this one was resolving
    pub superseded: bool,
    /// The current track was restarted rather than a new one resolved
    pub repeated: bool,
    pub song: Option<Track>,
    pub url: Option<String>,
}

impl From<PlayOutcome> for PlayResponse {
    fn from(outcome: PlayOutcome) -> Self {
        match outcome {
            PlayOutcome::Started { track, reference } => Self {
                status: true,
                superseded: false,
                repeated: false,
                song: Some(track),
                url: Some(reference.as_str().to_string()),
            },
            PlayOutcome::Superseded => Self {
                status: false,
                superseded: true,
                repeated: false,
                song: None,
                url: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaybackStateResponse {
    pub state: PlaybackState,
}

#[derive(Debug, Deserialize)]
pub struct SeekRequest {
    pub fraction: f64,
}

#[derive(Debug, Serialize)]
pub struct SeekResponse {
    pub progress: f32,
}

#[derive(Debug, Deserialize)]
pub struct ProgressReport {
    pub position_secs: f64,
    pub duration_secs: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ShuffleResponse {
    pub shuffle: bool,
}

#[derive(Debug, Serialize)]
pub struct RepeatResponse {
    pub repeat: bool,
}

/// GET /api/state - Everything the player view renders
pub async fn get_state(State(app_state): State<AppState>) -> Json<StateResponse> {
    Json(StateResponse {
        player: app_state.controller.snapshot().await,
        session: app_state.output.view(),
    })
}

/// POST /api/play/:index - Play the track at `index`
pub async fn play(
    State(app_state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<PlayResponse>> {
    let outcome = app_state.controller.play(index).await?;
    Ok(Json(outcome.into()))
}

/// POST /api/next - Skip to the next track
pub async fn next(State(app_state): State<AppState>) -> Result<Json<PlayResponse>> {
    let outcome = app_state.controller.next().await?;
    Ok(Json(outcome.into()))
}

/// POST /api/previous - Go to the previous track
pub async fn previous(State(app_state): State<AppState>) -> Result<Json<PlayResponse>> {
    let outcome = app_state.controller.previous().await?;
    Ok(Json(outcome.into()))
}

/// POST /api/toggle_play - Pause or resume
pub async fn toggle_play(
    State(app_state): State<AppState>,
) -> Result<Json<PlaybackStateResponse>> {
    let state = app_state.controller.toggle_play_pause().await?;
    Ok(Json(PlaybackStateResponse { state }))
}

/// POST /api/ended - The browser finished the current track
pub async fn ended(State(app_state): State<AppState>) -> Result<Json<PlayResponse>> {
    match app_state.controller.on_track_ended().await? {
        Some(outcome) => Ok(Json(outcome.into())),
        None => Ok(Json(PlayResponse {
            status: true,
            superseded: false,
            repeated: true,
            song: app_state.controller.current_track().await,
            url: app_state.output.view().source,
        })),
    }
}

/// POST /api/seek - Seek to a fraction of the current track
pub async fn seek(
    State(app_state): State<AppState>,
    Json(req): Json<SeekRequest>,
) -> Result<Json<SeekResponse>> {
    app_state.controller.seek(req.fraction).await?;
    Ok(Json(SeekResponse {
        progress: app_state.controller.progress().await,
    }))
}

/// POST /api/progress - Position reported by the browser
pub async fn report_progress(
    State(app_state): State<AppState>,
    Json(report): Json<ProgressReport>,
) -> Result<StatusCode> {
    let position = to_duration("position_secs", report.position_secs)?;
    let duration = report
        .duration_secs
        .map(|secs| to_duration("duration_secs", secs))
        .transpose()?;

    app_state.output.report(position, duration);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/toggle_shuffle - Flip shuffle
pub async fn toggle_shuffle(State(app_state): State<AppState>) -> Json<ShuffleResponse> {
    Json(ShuffleResponse {
        shuffle: app_state.controller.toggle_shuffle().await,
    })
}

/// POST /api/toggle_repeat - Flip repeat
pub async fn toggle_repeat(State(app_state): State<AppState>) -> Json<RepeatResponse> {
    Json(RepeatResponse {
        repeat: app_state.controller.toggle_repeat().await,
    })
}

fn to_duration(field: &str, secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| ServerError::BadRequest(format!("{field} must be a non-negative number")))
}
