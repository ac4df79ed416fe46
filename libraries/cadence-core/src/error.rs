/// Core error types for Cadence
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using `CadenceError`
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Errors reported by the external collaborators (search, resolution,
/// download, audio output).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadenceError {
    /// The search service could not produce results
    #[error("Search failed: {0}")]
    SearchFailed(String),

    /// A track could not be turned into a playable reference
    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),

    /// A track could not be turned into a downloadable reference
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    /// The audio output rejected a command
    #[error("Audio output error: {0}")]
    Output(String),
}

impl CadenceError {
    /// Create a search failure
    pub fn search(msg: impl Into<String>) -> Self {
        Self::SearchFailed(msg.into())
    }

    /// Create a resolution failure
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::ResolutionFailed(msg.into())
    }

    /// Create a download failure
    pub fn download(msg: impl Into<String>) -> Self {
        Self::DownloadFailed(msg.into())
    }

    /// Create an audio output error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// The kind used to key user-visible notifications
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SearchFailed(_) => ErrorKind::SearchFailed,
            Self::ResolutionFailed(_) => ErrorKind::ResolutionFailed,
            Self::DownloadFailed(_) => ErrorKind::DownloadFailed,
            Self::Output(_) => ErrorKind::Output,
        }
    }
}

/// Error kinds surfaced to the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Search produced no usable results
    SearchFailed,
    /// Track resolution failed
    ResolutionFailed,
    /// Download lookup failed
    DownloadFailed,
    /// Index outside the playlist
    IndexOutOfRange,
    /// Audio output rejected a command
    Output,
}
