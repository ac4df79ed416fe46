//! Core types for playback management

use cadence_core::{PlayableReference, Track};
use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_HISTORY_SIZE;
use crate::queue::DEFAULT_PREVIEW_SIZE;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Nothing has been played yet
    #[default]
    Idle,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 10)
    pub history_size: usize,

    /// Number of upcoming tracks in the queue preview (default: 5)
    pub preview_size: usize,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// Initial repeat flag (default: false)
    pub repeat: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            preview_size: DEFAULT_PREVIEW_SIZE,
            shuffle: false,
            repeat: false,
        }
    }
}

/// Result of a `play` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The track was resolved and handed to the audio output
    Started {
        track: Track,
        reference: PlayableReference,
    },

    /// A newer request was issued while this one was resolving; its result
    /// was discarded
    Superseded,
}

impl PlayOutcome {
    /// The started track, if this request won
    pub fn track(&self) -> Option<&Track> {
        match self {
            Self::Started { track, .. } => Some(track),
            Self::Superseded => None,
        }
    }

    /// The playable reference, if this request won
    pub fn reference(&self) -> Option<&PlayableReference> {
        match self {
            Self::Started { reference, .. } => Some(reference),
            Self::Superseded => None,
        }
    }
}

/// Point-in-time view of everything the display layer renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub state: PlaybackState,
    pub current_track: Option<Track>,
    pub cursor: Option<usize>,
    pub playlist_len: usize,
    pub shuffle: bool,
    pub repeat: bool,
    /// Position as a fraction of the duration, in `[0, 1]`
    pub progress: f32,
    pub upcoming: Vec<Track>,
    pub history: Vec<Track>,
}
