//! Cadence - Playback Management
//!
//! Playlist, recently-played history, queue preview and playback control for
//! Cadence.
//!
//! This crate provides:
//! - An ordered playlist with a cursor
//! - Bounded, de-duplicated recently-played history (most recent first)
//! - A sequential preview of upcoming tracks
//! - Shuffle and repeat flags
//! - Last-call-wins resolution of play requests
//! - Player events for display layers
//!
//! # Architecture
//!
//! All mutable player data lives in one owned [`PlayerState`]; the
//! [`PlaybackController`] is the single writer. Searching, resolving,
//! downloading and audio output are injected through the traits in
//! `cadence-core`, so the same controller runs against real HTTP services or
//! against mocks in tests.
//!
//! # Example: Playlist state
//!
//! ```rust
//! use cadence_core::Track;
//! use cadence_playback::{PlaybackConfig, PlayerState};
//!
//! let mut state = PlayerState::new(&PlaybackConfig::default());
//! state.replace_playlist(vec![
//!     Track::new("a", "First"),
//!     Track::new("b", "Second"),
//!     Track::new("c", "Third"),
//! ]);
//!
//! // No cursor yet, so "next" starts after the first track
//! assert_eq!(state.next_index(), Some(1));
//! assert_eq!(state.previous_index(), Some(2));
//! assert_eq!(state.preview().len(), 2);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use cadence_core::{
//!     AudioOutput, DownloadService, DownloadableReference, PlayableReference, Result,
//!     SearchService, Track, TrackResolver,
//! };
//! use cadence_playback::{PlaybackConfig, PlaybackController, Services};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! struct Catalog;
//!
//! #[async_trait]
//! impl SearchService for Catalog {
//!     async fn search(&self, query: &str) -> Result<Vec<Track>> {
//!         Ok(vec![Track::new("1", query)])
//!     }
//! }
//!
//! #[async_trait]
//! impl TrackResolver for Catalog {
//!     async fn resolve(&self, track: &Track) -> Result<PlayableReference> {
//!         Ok(PlayableReference::new(format!("https://cdn.example/{}.mp3", track.id())))
//!     }
//! }
//!
//! #[async_trait]
//! impl DownloadService for Catalog {
//!     async fn resolve_download(&self, track: &Track) -> Result<DownloadableReference> {
//!         Ok(DownloadableReference::new(format!("https://cdn.example/{}.mp3", track.id())))
//!     }
//! }
//!
//! struct Silent;
//!
//! impl AudioOutput for Silent {
//!     fn load(&mut self, _reference: &PlayableReference) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn current_time(&self) -> Duration { Duration::ZERO }
//!     fn duration(&self) -> Option<Duration> { None }
//! }
//!
//! # async fn run() -> cadence_playback::Result<()> {
//! let catalog = Arc::new(Catalog);
//! let controller = PlaybackController::new(
//!     PlaybackConfig::default(),
//!     Services {
//!         search: catalog.clone(),
//!         resolver: catalog.clone(),
//!         downloads: catalog,
//!         output: Box::new(Silent),
//!     },
//! );
//!
//! controller.search("popular songs").await;
//! controller.play(0).await?;
//! controller.next().await?;
//! # Ok(())
//! # }
//! ```

mod controller;
mod error;
pub mod events;
mod history;
mod playlist;
mod queue;
mod shuffle;
mod state;
pub mod types;

// Public exports
pub use controller::{PlaybackController, Services};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use history::{History, DEFAULT_HISTORY_SIZE};
pub use playlist::Playlist;
pub use queue::{preview, DEFAULT_PREVIEW_SIZE};
pub use shuffle::{pick_other_index, RandomSource, ScriptedRandom, ThreadRandom};
pub use state::{PendingPlay, PlayerState, ResolutionTicket};
pub use types::{PlayOutcome, PlaybackConfig, PlaybackState, PlayerSnapshot};
