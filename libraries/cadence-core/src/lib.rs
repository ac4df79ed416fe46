//! Cadence Core
//!
//! Shared types, collaborator traits, and error handling for Cadence.
//!
//! This crate provides the building blocks used by the playback state core
//! and by the concrete service implementations (HTTP client, server).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `PlayableReference`, `DownloadableReference`
//! - **Core Traits**: `SearchService`, `TrackResolver`, `DownloadService`, `AudioOutput`
//! - **Error Handling**: `CadenceError`, `ErrorKind` and `Result`
//!
//! # Example
//!
//! ```rust
//! use cadence_core::types::{Track, TrackId};
//!
//! let track = Track::new("dQw4w9WgXcQ", "Never Gonna Give You Up")
//!     .with_artist("Rick Astley")
//!     .with_duration_label("3:33")
//!     .with_source_url("https://youtube.com/watch?v=dQw4w9WgXcQ");
//!
//! assert_eq!(track.id(), &TrackId::new("dQw4w9WgXcQ"));
//! assert_eq!(track.artist(), "Rick Astley");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CadenceError, ErrorKind, Result};
pub use traits::{AudioOutput, DownloadService, SearchService, TrackResolver};
pub use types::{
    DownloadableReference, PlayableReference, Track, TrackId, PLACEHOLDER_THUMBNAIL, UNKNOWN_ARTIST,
};
