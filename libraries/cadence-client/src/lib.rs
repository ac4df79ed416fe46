//! Cadence Media API Client
//!
//! HTTP client for the search and MP3 link endpoints the player is fed from.
//!
//! # Features
//!
//! - **Search**: query the search endpoint and turn hits into `Track`s
//! - **Resolution**: fetch a playable MP3 link for a track
//! - **Downloads**: fetch a downloadable MP3 link for a track
//!
//! `MediaApiClient` implements `SearchService`, `TrackResolver` and
//! `DownloadService` from `cadence-core`, so it plugs straight into the
//! playback controller.
//!
//! # Example
//!
//! ```ignore
//! use cadence_client::{ApiConfig, MediaApiClient};
//! use cadence_core::SearchService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MediaApiClient::new(ApiConfig::default())?;
//!
//!     let tracks = client.search("lofi beats").await?;
//!     for track in &tracks {
//!         println!("{} - {} [{}]", track.artist(), track.title(), track.duration_label());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod services;
mod types;

pub use client::MediaApiClient;
pub use error::{ClientError, Result};
pub use types::{
    ApiConfig, DownloadResponse, SearchItem, SearchResponse, DEFAULT_DOWNLOAD_URL,
    DEFAULT_SEARCH_URL, UNKNOWN_TITLE,
};
