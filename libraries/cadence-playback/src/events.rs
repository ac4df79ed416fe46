//! Player Events
//!
//! Event-based communication for UI synchronization. The controller publishes
//! events on a broadcast channel; the display layer subscribes and renders.
//! Events are emitted at key points:
//! - State changes (play/pause)
//! - Track changes (after a resolution wins)
//! - Flag changes (shuffle/repeat)
//! - Playlist, queue preview and history changes
//! - Non-fatal errors, keyed by kind

use crate::types::PlaybackState;
use cadence_core::{ErrorKind, Track, TrackId};
use serde::{Deserialize, Serialize};

/// Capacity of the broadcast channel; slow subscribers skip older events
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A new track was handed to the audio output
    TrackChanged {
        /// The new current track
        track: Track,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Shuffle flag changed
    ShuffleChanged { enabled: bool },

    /// Repeat flag changed
    RepeatChanged { enabled: bool },

    /// Playlist replaced or extended
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Queue preview changed
    QueueChanged {
        /// Upcoming tracks in sequential order
        upcoming: Vec<Track>,
    },

    /// History changed
    HistoryChanged {
        /// Recently played, most recent first
        history: Vec<Track>,
    },

    /// Non-fatal error for the user
    Error { kind: ErrorKind, message: String },
}

impl PlayerEvent {
    /// Build an error event from anything carrying a kind
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Error {
            kind,
            message: message.into(),
        }
    }

    /// The error kind, for error events
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_only_for_errors() {
        let err = PlayerEvent::error(ErrorKind::ResolutionFailed, "boom");
        assert_eq!(err.error_kind(), Some(ErrorKind::ResolutionFailed));

        let state = PlayerEvent::StateChanged {
            state: PlaybackState::Paused,
        };
        assert_eq!(state.error_kind(), None);
    }
}
