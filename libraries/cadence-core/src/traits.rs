/// Collaborator traits for Cadence
use crate::error::Result;
use crate::types::{DownloadableReference, PlayableReference, Track};
use async_trait::async_trait;
use std::time::Duration;

/// Search service trait
///
/// Implementers turn a free-text query into an ordered list of tracks.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Search for tracks matching `query`
    ///
    /// # Errors
    /// Returns `CadenceError::SearchFailed` if the service cannot be reached
    /// or returns an unusable response
    async fn search(&self, query: &str) -> Result<Vec<Track>>;
}

/// Track resolver trait
///
/// Implementers translate a track into a reference the audio output can load.
#[async_trait]
pub trait TrackResolver: Send + Sync {
    /// Resolve a playable reference for `track`
    ///
    /// # Errors
    /// Returns `CadenceError::ResolutionFailed` if no playable reference exists
    async fn resolve(&self, track: &Track) -> Result<PlayableReference>;
}

/// Download service trait
#[async_trait]
pub trait DownloadService: Send + Sync {
    /// Resolve a downloadable reference for `track`
    ///
    /// # Errors
    /// Returns `CadenceError::DownloadFailed` if no download is available
    async fn resolve_download(&self, track: &Track) -> Result<DownloadableReference>;
}

/// Audio output trait
///
/// A single exclusive output device. Loading a new reference implicitly
/// stops whatever was loaded before. The "ended" notification is delivered by
/// the host calling back into the playback controller.
pub trait AudioOutput: Send {
    /// Replace the active source with `reference`
    ///
    /// # Errors
    /// Returns an error if the output cannot open the reference
    fn load(&mut self, reference: &PlayableReference) -> Result<()>;

    /// Start or resume the active source
    fn play(&mut self) -> Result<()>;

    /// Pause the active source
    fn pause(&mut self) -> Result<()>;

    /// Move the playback position of the active source
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Current playback position
    fn current_time(&self) -> Duration;

    /// Duration of the active source, if known
    fn duration(&self) -> Option<Duration>;
}
