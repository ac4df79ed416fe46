/// Shared application state
use crate::config::ServerConfig;
use crate::error::Result;
use crate::output::SessionOutput;
use cadence_client::MediaApiClient;
use cadence_core::{DownloadService, SearchService, TrackResolver};
use cadence_playback::{PlaybackController, Services};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: PlaybackController,
    pub output: SessionOutput,
    /// Link lookups for URLs outside the playlist
    pub downloads: Arc<dyn DownloadService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by the media API from `config`
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let client = Arc::new(MediaApiClient::new(config.api.clone())?);
        Ok(Self::new(config, client.clone(), client.clone(), client))
    }

    pub fn new(
        config: ServerConfig,
        search: Arc<dyn SearchService>,
        resolver: Arc<dyn TrackResolver>,
        downloads: Arc<dyn DownloadService>,
    ) -> Self {
        let output = SessionOutput::new();
        let controller = PlaybackController::new(
            config.player.playback_config(),
            Services {
                search,
                resolver,
                downloads: downloads.clone(),
                output: Box::new(output.clone()),
            },
        );

        Self {
            controller,
            output,
            downloads,
            config: Arc::new(config),
        }
    }
}
