//! Playback controller
//!
//! Orchestrates the owned `PlayerState` against the external collaborators:
//! the track resolver, the search and download services, and the audio
//! output. This is the only asynchronous part of the crate.

use crate::error::{PlaybackError, Result};
use crate::events::{PlayerEvent, EVENT_CHANNEL_CAPACITY};
use crate::shuffle::{RandomSource, ThreadRandom};
use crate::state::PlayerState;
use crate::types::{PlayOutcome, PlaybackConfig, PlaybackState, PlayerSnapshot};
use cadence_core::{
    AudioOutput, CadenceError, DownloadService, DownloadableReference, SearchService, Track,
    TrackId, TrackResolver,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

/// External collaborators the controller drives
pub struct Services {
    pub search: Arc<dyn SearchService>,
    pub resolver: Arc<dyn TrackResolver>,
    pub downloads: Arc<dyn DownloadService>,
    pub output: Box<dyn AudioOutput>,
}

/// State and the exclusive output device, locked together
struct Core {
    state: PlayerState,
    output: Box<dyn AudioOutput>,
}

impl Core {
    fn progress(&self) -> f32 {
        progress_fraction(self.output.current_time(), self.output.duration())
    }
}

/// Position as a fraction of duration, clamped to `[0, 1]`
fn progress_fraction(position: Duration, duration: Option<Duration>) -> f32 {
    match duration {
        Some(duration) if !duration.is_zero() => {
            (position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0) as f32
        }
        _ => 0.0,
    }
}

/// Playback controller
///
/// Cheap to clone; clones share the same player. Every operation takes the
/// state lock only for its synchronous transition. The lock is never held
/// across the resolver call, so a second `play` can be issued while the first
/// is resolving; the later request wins and the earlier result is dropped.
///
/// Responsibilities:
/// - Play by index with last-call-wins resolution
/// - Play/pause toggling
/// - Next (shuffle-aware) and previous (always sequential)
/// - Repeat on track end
/// - Seek by fraction
/// - Search, history selection and download lookups
/// - Publishing `PlayerEvent`s to subscribers
#[derive(Clone)]
pub struct PlaybackController {
    core: Arc<Mutex<Core>>,
    search: Arc<dyn SearchService>,
    resolver: Arc<dyn TrackResolver>,
    downloads: Arc<dyn DownloadService>,
    events: broadcast::Sender<PlayerEvent>,
}

impl PlaybackController {
    /// Create a controller using the thread RNG for shuffle
    pub fn new(config: PlaybackConfig, services: Services) -> Self {
        Self::with_random(config, services, Box::new(ThreadRandom))
    }

    /// Create a controller with an injected random source
    pub fn with_random(
        config: PlaybackConfig,
        services: Services,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let core = Core {
            state: PlayerState::with_random(&config, random),
            output: services.output,
        };

        Self {
            core: Arc::new(Mutex::new(core)),
            search: services.search,
            resolver: services.resolver,
            downloads: services.downloads,
            events,
        }
    }

    /// Subscribe to player events
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    // ===== Playback Control =====

    /// Play the track at `index`
    ///
    /// Moves the cursor immediately and resolves the track. If a newer request
    /// is issued before this one resolves, returns `PlayOutcome::Superseded`
    /// and changes nothing. On failure the cursor and playback state are put
    /// back and an error event is published.
    pub async fn play(&self, index: usize) -> Result<PlayOutcome> {
        let pending = {
            let mut core = self.core.lock().await;
            core.state.begin_play(index).map_err(|err| {
                debug!(index, error = %err, "Ignoring play request");
                err
            })?
        };

        debug!(
            ticket = %pending.ticket,
            index,
            track_id = %pending.track.id(),
            "Resolving track"
        );
        let resolved = self.resolver.resolve(&pending.track).await;

        let mut core = self.core.lock().await;
        if !core.state.is_live(pending.ticket) {
            debug!(ticket = %pending.ticket, "Discarding superseded resolution");
            return Ok(PlayOutcome::Superseded);
        }

        let reference = match resolved {
            Ok(reference) => reference,
            Err(err) => {
                core.state.fail_play(pending.ticket);
                drop(core);
                return Err(self.report(err, &pending.track));
            }
        };

        let loaded = match core.output.load(&reference) {
            Ok(()) => core.output.play(),
            Err(err) => Err(err),
        };
        if let Err(err) = loaded {
            core.state.fail_play(pending.ticket);
            drop(core);
            return Err(self.report(err, &pending.track));
        }

        let was = core.state.playback();
        let previous_track_id = core
            .state
            .complete_play(pending.ticket, pending.track.clone())
            .flatten();
        let upcoming = core.state.preview();
        let history = core.state.history().to_vec();
        drop(core);

        info!(track_id = %pending.track.id(), title = %pending.track.title(), "Now playing");

        self.emit(PlayerEvent::TrackChanged {
            track: pending.track.clone(),
            previous_track_id,
        });
        if was != PlaybackState::Playing {
            self.emit(PlayerEvent::StateChanged {
                state: PlaybackState::Playing,
            });
        }
        self.emit(PlayerEvent::QueueChanged { upcoming });
        self.emit(PlayerEvent::HistoryChanged { history });

        Ok(PlayOutcome::Started {
            track: pending.track,
            reference,
        })
    }

    /// Pause if playing, resume if paused; no-op when idle
    pub async fn toggle_play_pause(&self) -> Result<PlaybackState> {
        let mut core = self.core.lock().await;
        let target = match core.state.playback() {
            PlaybackState::Idle => return Ok(PlaybackState::Idle),
            PlaybackState::Playing => {
                if let Err(err) = core.output.pause() {
                    drop(core);
                    return Err(self.report_output(err));
                }
                PlaybackState::Paused
            }
            PlaybackState::Paused => {
                if let Err(err) = core.output.play() {
                    drop(core);
                    return Err(self.report_output(err));
                }
                PlaybackState::Playing
            }
        };

        core.state.set_playback(target);
        drop(core);

        debug!(state = ?target, "Toggled playback");
        self.emit(PlayerEvent::StateChanged { state: target });
        Ok(target)
    }

    /// Skip to the next track
    ///
    /// Random (never the current index) when shuffle is on, sequential with
    /// wraparound otherwise.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&self) -> Result<PlayOutcome> {
        let index = self
            .core
            .lock()
            .await
            .state
            .next_index()
            .ok_or(PlaybackError::EmptyPlaylist)?;
        self.play(index).await
    }

    /// Go to the previous track
    ///
    /// Always sequential, even with shuffle on.
    pub async fn previous(&self) -> Result<PlayOutcome> {
        let index = self
            .core
            .lock()
            .await
            .state
            .previous_index()
            .ok_or(PlaybackError::EmptyPlaylist)?;
        self.play(index).await
    }

    /// Handle the output's "ended" notification
    ///
    /// With repeat on, rewinds and resumes the same track without a new
    /// resolution. Otherwise behaves as `next()`. Returns `None` when the
    /// track was repeated.
    pub async fn on_track_ended(&self) -> Result<Option<PlayOutcome>> {
        {
            let mut core = self.core.lock().await;
            if core.state.repeat() && core.state.current_track().is_some() {
                let restarted = match core.output.seek(Duration::ZERO) {
                    Ok(()) => core.output.play(),
                    Err(err) => Err(err),
                };
                if let Err(err) = restarted {
                    drop(core);
                    return Err(self.report_output(err));
                }

                let changed = core.state.set_playback(PlaybackState::Playing);
                drop(core);

                debug!("Repeating current track");
                if changed {
                    self.emit(PlayerEvent::StateChanged {
                        state: PlaybackState::Playing,
                    });
                }
                return Ok(None);
            }
        }

        self.next().await.map(Some)
    }

    /// Seek to `fraction` of the current track's duration
    ///
    /// Values are clamped to `[0, 1]` (NaN counts as 0). No-op when the
    /// output has no duration to scale against.
    pub async fn seek(&self, fraction: f64) -> Result<()> {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        let mut core = self.core.lock().await;
        let Some(duration) = core.output.duration() else {
            debug!(fraction, "Seek ignored, nothing loaded");
            return Ok(());
        };

        let position = duration.mul_f64(fraction);
        if let Err(err) = core.output.seek(position) {
            drop(core);
            return Err(self.report_output(err));
        }

        debug!(fraction, position_ms = position.as_millis() as u64, "Seeked");
        Ok(())
    }

    // ===== Shuffle / Repeat =====

    pub async fn set_shuffle(&self, enabled: bool) {
        self.core.lock().await.state.set_shuffle(enabled);
        self.emit(PlayerEvent::ShuffleChanged { enabled });
    }

    pub async fn set_repeat(&self, enabled: bool) {
        self.core.lock().await.state.set_repeat(enabled);
        self.emit(PlayerEvent::RepeatChanged { enabled });
    }

    /// Flip the shuffle flag, returning the new value
    pub async fn toggle_shuffle(&self) -> bool {
        let enabled = {
            let mut core = self.core.lock().await;
            let enabled = !core.state.shuffle();
            core.state.set_shuffle(enabled);
            enabled
        };
        self.emit(PlayerEvent::ShuffleChanged { enabled });
        enabled
    }

    /// Flip the repeat flag, returning the new value
    pub async fn toggle_repeat(&self) -> bool {
        let enabled = {
            let mut core = self.core.lock().await;
            let enabled = !core.state.repeat();
            core.state.set_repeat(enabled);
            enabled
        };
        self.emit(PlayerEvent::RepeatChanged { enabled });
        enabled
    }

    // ===== Playlist sources =====

    /// Search and, on non-empty results, replace the playlist
    ///
    /// A failed search is reported as an error event and yields no results;
    /// the playlist is only replaced when there is something to show.
    pub async fn search(&self, query: &str) -> Vec<Track> {
        let tracks = match self.search.search(query).await {
            Ok(tracks) => tracks,
            Err(err) => {
                warn!(query, error = %err, "Search failed");
                self.emit(PlayerEvent::error(err.kind(), err.to_string()));
                return Vec::new();
            }
        };

        if tracks.is_empty() {
            info!(query, "Search returned no results");
            return tracks;
        }

        let upcoming = {
            let mut core = self.core.lock().await;
            core.state.replace_playlist(tracks.clone());
            core.state.preview()
        };

        info!(query, results = tracks.len(), "Playlist replaced from search");
        self.emit(PlayerEvent::PlaylistChanged {
            length: tracks.len(),
        });
        self.emit(PlayerEvent::QueueChanged { upcoming });
        tracks
    }

    /// Replace the playlist directly
    pub async fn replace_playlist(&self, tracks: Vec<Track>) {
        let length = tracks.len();
        let upcoming = {
            let mut core = self.core.lock().await;
            core.state.replace_playlist(tracks);
            core.state.preview()
        };

        self.emit(PlayerEvent::PlaylistChanged { length });
        self.emit(PlayerEvent::QueueChanged { upcoming });
    }

    /// Play a recently played track
    ///
    /// The track is prepended to the playlist if it is not already in it.
    pub async fn play_from_history(&self, id: &TrackId) -> Result<PlayOutcome> {
        let (index, length, inserted) = {
            let mut core = self.core.lock().await;
            let track = core
                .state
                .history()
                .find(id)
                .cloned()
                .ok_or_else(|| PlaybackError::NotInHistory(id.clone()))?;
            let before = core.state.playlist().len();
            let index = core.state.prepend_if_absent(track);
            let length = core.state.playlist().len();
            (index, length, length > before)
        };

        debug!(track_id = %id, index, inserted, "Playing from history");
        if inserted {
            self.emit(PlayerEvent::PlaylistChanged { length });
        }
        self.play(index).await
    }

    // ===== Downloads =====

    /// Look up a download for the track at `index`
    pub async fn download(&self, index: usize) -> Result<DownloadableReference> {
        let track = self.core.lock().await.state.playlist().get(index)?.clone();

        self.downloads
            .resolve_download(&track)
            .await
            .map_err(|err| self.report(err, &track))
    }

    /// Look up a download for the track under the cursor
    ///
    /// An absent cursor counts as index 0.
    pub async fn download_current(&self) -> Result<DownloadableReference> {
        let index = {
            let core = self.core.lock().await;
            if core.state.playlist().is_empty() {
                return Err(PlaybackError::EmptyPlaylist);
            }
            core.state.cursor().unwrap_or(0)
        };
        self.download(index).await
    }

    // ===== State Queries =====

    pub async fn state(&self) -> PlaybackState {
        self.core.lock().await.state.playback()
    }

    pub async fn cursor(&self) -> Option<usize> {
        self.core.lock().await.state.cursor()
    }

    pub async fn current_track(&self) -> Option<Track> {
        self.core.lock().await.state.current_track().cloned()
    }

    pub async fn shuffle(&self) -> bool {
        self.core.lock().await.state.shuffle()
    }

    pub async fn repeat(&self) -> bool {
        self.core.lock().await.state.repeat()
    }

    /// Current playlist contents
    pub async fn playlist(&self) -> Vec<Track> {
        self.core.lock().await.state.playlist().tracks().to_vec()
    }

    /// Recently played, most recent first
    pub async fn history(&self) -> Vec<Track> {
        self.core.lock().await.state.history().to_vec()
    }

    /// Configured number of upcoming tracks
    pub async fn preview(&self) -> Vec<Track> {
        self.core.lock().await.state.preview()
    }

    /// Up to `n` upcoming tracks
    pub async fn preview_n(&self, n: usize) -> Vec<Track> {
        self.core.lock().await.state.preview_n(n)
    }

    /// Position as a fraction of the duration, in `[0, 1]`
    pub async fn progress(&self) -> f32 {
        self.core.lock().await.progress()
    }

    /// Everything the display layer renders, in one lock
    pub async fn snapshot(&self) -> PlayerSnapshot {
        let core = self.core.lock().await;
        PlayerSnapshot {
            state: core.state.playback(),
            current_track: core.state.current_track().cloned(),
            cursor: core.state.cursor(),
            playlist_len: core.state.playlist().len(),
            shuffle: core.state.shuffle(),
            repeat: core.state.repeat(),
            progress: core.progress(),
            upcoming: core.state.preview(),
            history: core.state.history().to_vec(),
        }
    }

    // ===== Events =====

    fn emit(&self, event: PlayerEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    /// Log and publish a collaborator failure for `track`
    fn report(&self, err: CadenceError, track: &Track) -> PlaybackError {
        warn!(track_id = %track.id(), error = %err, "Collaborator failed");
        self.emit(PlayerEvent::error(err.kind(), err.to_string()));
        PlaybackError::Service(err)
    }

    fn report_output(&self, err: CadenceError) -> PlaybackError {
        warn!(error = %err, "Audio output failed");
        self.emit(PlayerEvent::error(err.kind(), err.to_string()));
        PlaybackError::Service(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fraction_clamps() {
        let dur = Some(Duration::from_secs(100));
        assert_eq!(progress_fraction(Duration::from_secs(25), dur), 0.25);
        assert_eq!(progress_fraction(Duration::from_secs(150), dur), 1.0);
    }

    #[test]
    fn progress_fraction_without_duration() {
        assert_eq!(progress_fraction(Duration::from_secs(5), None), 0.0);
        assert_eq!(
            progress_fraction(Duration::from_secs(5), Some(Duration::ZERO)),
            0.0
        );
    }
}
