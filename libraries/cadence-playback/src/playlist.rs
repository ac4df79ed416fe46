//! Playlist store
//!
//! Ordered sequence of tracks plus the play cursor.

use crate::error::{PlaybackError, Result};
use cadence_core::{Track, TrackId};

/// The current playlist and cursor
///
/// The cursor is `None` until an index has been played. Whenever it is
/// `Some(i)`, `i < len()` holds.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    cursor: Option<usize>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole playlist (e.g. with new search results)
    ///
    /// The cursor is cleared; callers play an index afterwards.
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.cursor = None;
    }

    /// Insert `track` at the front unless a track with the same id exists
    ///
    /// Returns true if the track was inserted. The cursor keeps pointing at
    /// the same track.
    pub fn prepend_if_absent(&mut self, track: Track) -> bool {
        if self.index_of(track.id()).is_some() {
            return false;
        }

        self.tracks.insert(0, track);
        if let Some(cursor) = self.cursor {
            self.cursor = Some(cursor + 1);
        }
        true
    }

    /// Get the track at `index`
    pub fn get(&self, index: usize) -> Result<&Track> {
        self.tracks.get(index).ok_or(PlaybackError::IndexOutOfRange {
            index,
            len: self.tracks.len(),
        })
    }

    /// Index of the first track with `id`
    pub fn index_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|track| track.id() == id)
    }

    /// Move the cursor to `index`
    pub fn set_cursor(&mut self, index: usize) -> Result<()> {
        self.get(index)?;
        self.cursor = Some(index);
        Ok(())
    }

    /// Put back a cursor captured earlier
    ///
    /// Ignores values that are no longer in range.
    pub(crate) fn restore_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor.filter(|&index| index < self.tracks.len());
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Track under the cursor
    pub fn current(&self) -> Option<&Track> {
        self.cursor.and_then(|index| self.tracks.get(index))
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
