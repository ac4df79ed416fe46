//! Cadence Server Library
//!
//! HTTP front for the playback controller: search, play, navigate, queue
//! preview, history and download links as JSON endpoints under `/api`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod output;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{PlayerSettings, ServerConfig, ServerSettings};
pub use error::{Result, ServerError};
pub use output::{SessionOutput, SessionView};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(api::health::health))
        // Search
        .route("/search", get(api::search::search))
        // Player
        .route("/state", get(api::player::get_state))
        // The browser player issues GETs for navigation
        .route("/play/:index", get(api::player::play).post(api::player::play))
        .route("/next", get(api::player::next).post(api::player::next))
        .route(
            "/previous",
            get(api::player::previous).post(api::player::previous),
        )
        .route("/toggle_play", post(api::player::toggle_play))
        .route("/ended", post(api::player::ended))
        .route("/seek", post(api::player::seek))
        .route("/progress", post(api::player::report_progress))
        .route(
            "/toggle_shuffle",
            get(api::player::toggle_shuffle).post(api::player::toggle_shuffle),
        )
        .route(
            "/toggle_repeat",
            get(api::player::toggle_repeat).post(api::player::toggle_repeat),
        )
        // Queue and history
        .route("/queue", get(api::queue::get_queue))
        .route("/recently_played", get(api::queue::recently_played))
        .route("/recently_played/:id/play", post(api::queue::play_recent))
        // Downloads
        .route("/download", get(api::download::download_current))
        .route("/download/:index", get(api::download::download))
        .route("/download_mp3", get(api::download::download_mp3));

    Router::new()
        .nest("/api", routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
