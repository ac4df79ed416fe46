//! Playback history tracking
//!
//! Maintains a bounded, deduplicated list of recently played tracks

use cadence_core::{Track, TrackId};
use std::collections::VecDeque;

/// Default number of remembered tracks
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Recently played tracks with bounded size
///
/// Most recent track is at the front. Ids are unique: recording a track that
/// is already present moves it to the front.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = front)
    tracks: VecDeque<Track>,

    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a played track
    ///
    /// Any existing entry with the same id is removed first, then the track
    /// is inserted at the front and the oldest entries beyond capacity are
    /// discarded.
    pub fn record(&mut self, track: Track) {
        self.tracks.retain(|existing| !existing.same_id(&track));
        self.tracks.push_front(track);
        self.tracks.truncate(self.max_size);
    }

    /// All tracks, most recent first
    pub fn list(&self) -> Vec<&Track> {
        self.tracks.iter().collect()
    }

    /// Owned copy of `list()`
    pub fn to_vec(&self) -> Vec<Track> {
        self.tracks.iter().cloned().collect()
    }

    /// Find a remembered track by id
    pub fn find(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
