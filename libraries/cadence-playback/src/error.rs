//! Error types for playback management

use cadence_core::{CadenceError, ErrorKind, TrackId};
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Index outside the current playlist
    #[error("Index out of range: {index} (playlist length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Playlist is empty
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Track is not in the recently played list
    #[error("Track not in history: {0}")]
    NotInHistory(TrackId),

    /// A collaborator (resolver, download service, audio output) failed
    #[error(transparent)]
    Service(#[from] CadenceError),
}

impl PlaybackError {
    /// The kind used to key user-visible notifications
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } | Self::EmptyPlaylist | Self::NotInHistory(_) => {
                ErrorKind::IndexOutOfRange
            }
            Self::Service(err) => err.kind(),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
