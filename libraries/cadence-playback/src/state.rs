//! Owned player state
//!
//! All mutable player state lives in one `PlayerState`: playlist and cursor,
//! history, playback state, flags, the random source and the live
//! resolution ticket. Transitions here are synchronous and side-effect free;
//! the controller drives them around the asynchronous resolver call.

use crate::error::{PlaybackError, Result};
use crate::history::History;
use crate::playlist::Playlist;
use crate::queue;
use crate::shuffle::{pick_other_index, RandomSource, ThreadRandom};
use crate::types::{PlaybackConfig, PlaybackState};
use cadence_core::{Track, TrackId};
use std::fmt;

/// Identifier of a resolution request
///
/// Tickets increase monotonically; only the most recently issued one is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolutionTicket(u64);

impl fmt::Display for ResolutionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A resolution the caller must perform for `track`
#[derive(Debug, Clone)]
pub struct PendingPlay {
    pub ticket: ResolutionTicket,
    pub index: usize,
    pub track: Track,
}

/// The live request and the cursor to fall back to if it fails
#[derive(Debug, Clone, Copy)]
struct PendingResolution {
    ticket: ResolutionTicket,
    restore_cursor: Option<usize>,
}

/// Everything the player knows, owned in one place
pub struct PlayerState {
    playlist: Playlist,
    history: History,
    playback: PlaybackState,
    shuffle: bool,
    repeat: bool,
    current: Option<Track>,
    pending: Option<PendingResolution>,
    last_ticket: u64,
    preview_size: usize,
    random: Box<dyn RandomSource>,
}

impl fmt::Debug for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerState")
            .field("playlist", &self.playlist)
            .field("history", &self.history)
            .field("playback", &self.playback)
            .field("shuffle", &self.shuffle)
            .field("repeat", &self.repeat)
            .field("current", &self.current)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl PlayerState {
    /// Create state using the thread RNG for shuffle
    pub fn new(config: &PlaybackConfig) -> Self {
        Self::with_random(config, Box::new(ThreadRandom))
    }

    /// Create state with an injected random source
    pub fn with_random(config: &PlaybackConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            playlist: Playlist::new(),
            history: History::new(config.history_size),
            playback: PlaybackState::Idle,
            shuffle: config.shuffle,
            repeat: config.repeat,
            current: None,
            pending: None,
            last_ticket: 0,
            preview_size: config.preview_size,
            random,
        }
    }

    // ===== Playlist =====

    /// Replace the playlist wholesale
    ///
    /// Any pending resolution refers to the old playlist and becomes stale.
    pub fn replace_playlist(&mut self, tracks: Vec<Track>) {
        self.playlist.replace(tracks);
        self.pending = None;
    }

    /// Prepend `track` unless present; returns its index either way
    pub fn prepend_if_absent(&mut self, track: Track) -> usize {
        let id = track.id().clone();
        if self.playlist.prepend_if_absent(track) {
            if let Some(pending) = self.pending.as_mut() {
                pending.restore_cursor = pending.restore_cursor.map(|cursor| cursor + 1);
            }
            0
        } else {
            self.playlist.index_of(&id).unwrap_or(0)
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn cursor(&self) -> Option<usize> {
        self.playlist.cursor()
    }

    // ===== Resolution lifecycle =====

    /// Start a play request for `index`
    ///
    /// Moves the cursor and issues a new ticket, superseding any pending one.
    /// Fails without touching anything if `index` is out of range.
    pub fn begin_play(&mut self, index: usize) -> Result<PendingPlay> {
        let track = self.playlist.get(index)?.clone();

        // A superseded request never committed, so fall back to what it would have
        let restore_cursor = match self.pending {
            Some(pending) => pending.restore_cursor,
            None => self.playlist.cursor(),
        };

        self.playlist.set_cursor(index)?;
        self.last_ticket += 1;
        let ticket = ResolutionTicket(self.last_ticket);
        self.pending = Some(PendingResolution {
            ticket,
            restore_cursor,
        });

        Ok(PendingPlay {
            ticket,
            index,
            track,
        })
    }

    /// Whether `ticket` is the live request
    pub fn is_live(&self, ticket: ResolutionTicket) -> bool {
        self.pending.is_some_and(|pending| pending.ticket == ticket)
    }

    /// Commit a successful resolution
    ///
    /// Returns the previously current track's id, or `None` with no changes
    /// if the ticket is stale.
    pub fn complete_play(
        &mut self,
        ticket: ResolutionTicket,
        track: Track,
    ) -> Option<Option<TrackId>> {
        if !self.is_live(ticket) {
            return None;
        }

        self.pending = None;
        self.playback = PlaybackState::Playing;
        self.history.record(track.clone());
        let previous = self.current.replace(track);
        Some(previous.map(|t| t.id().clone()))
    }

    /// Roll back a failed resolution
    ///
    /// Restores the cursor captured when the request chain started. Returns
    /// false with no changes if the ticket is stale.
    pub fn fail_play(&mut self, ticket: ResolutionTicket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                self.playlist.restore_cursor(pending.restore_cursor);
                true
            }
            _ => false,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    // ===== Navigation =====

    /// Index `next()` should play
    ///
    /// With shuffle on and more than one track, a random index other than the
    /// cursor; otherwise the following index, wrapping. An absent cursor
    /// counts as index 0. `None` on an empty playlist.
    pub fn next_index(&mut self) -> Option<usize> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }

        let current = self.playlist.cursor().unwrap_or(0);
        if self.shuffle && len > 1 {
            Some(pick_other_index(self.random.as_mut(), len, current))
        } else {
            Some((current + 1) % len)
        }
    }

    /// Index `previous()` should play
    ///
    /// Always sequential, whether or not shuffle is on.
    pub fn previous_index(&self) -> Option<usize> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }

        let current = self.playlist.cursor().unwrap_or(0);
        Some((current + len - 1) % len)
    }

    /// Upcoming tracks in sequential order
    pub fn preview(&self) -> Vec<Track> {
        self.preview_n(self.preview_size)
    }

    /// Up to `n` upcoming tracks in sequential order
    pub fn preview_n(&self, n: usize) -> Vec<Track> {
        queue::preview(self.playlist.tracks(), self.playlist.cursor(), n)
    }

    // ===== Playback state =====

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    /// Set the playback state; returns true if it changed
    pub fn set_playback(&mut self, playback: PlaybackState) -> bool {
        let changed = self.playback != playback;
        self.playback = playback;
        changed
    }

    /// Track currently handed to the audio output
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // ===== Flags =====

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn set_shuffle(&mut self, enabled: bool) {
        self.shuffle = enabled;
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn set_repeat(&mut self, enabled: bool) {
        self.repeat = enabled;
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}
