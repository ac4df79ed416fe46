//! Collaborator traits backed by the media API.
//!
//! Playback and downloads both go through the MP3 link endpoint; the browser
//! streams the same link it would download.

use crate::client::MediaApiClient;
use crate::error::ClientError;
use async_trait::async_trait;
use cadence_core::{
    DownloadService, DownloadableReference, PlayableReference, Result, SearchService, Track,
    TrackResolver,
};
use tracing::debug;

#[async_trait]
impl SearchService for MediaApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Track>> {
        match self.search_tracks(query).await {
            Ok(tracks) => Ok(tracks),
            Err(ClientError::NoResults(_)) => {
                debug!(query, "API reported no results");
                Ok(Vec::new())
            }
            Err(err) => Err(err.into_search()),
        }
    }
}

#[async_trait]
impl TrackResolver for MediaApiClient {
    async fn resolve(&self, track: &Track) -> Result<PlayableReference> {
        self.mp3_link(track.source_url())
            .await
            .map(PlayableReference::new)
            .map_err(ClientError::into_resolution)
    }
}

#[async_trait]
impl DownloadService for MediaApiClient {
    async fn resolve_download(&self, track: &Track) -> Result<DownloadableReference> {
        self.mp3_link(track.source_url())
            .await
            .map(DownloadableReference::new)
            .map_err(ClientError::into_download)
    }
}
