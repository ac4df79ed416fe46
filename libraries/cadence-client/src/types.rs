//! Types for media API requests and responses.

use cadence_core::{Track, PLACEHOLDER_THUMBNAIL, UNKNOWN_ARTIST};
use serde::{Deserialize, Serialize};

/// Default search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://api.siputzx.my.id/api/s/youtube";

/// Default MP3 link endpoint
pub const DEFAULT_DOWNLOAD_URL: &str = "https://api.siputzx.my.id/api/d/ytmp3";

/// Title used when an item has none
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Configuration for the media API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Search endpoint, called with `?query=`
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// MP3 link endpoint, called with `?url=`
    #[serde(default = "default_download_url")]
    pub download_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_download_url() -> String {
    DEFAULT_DOWNLOAD_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            download_url: default_download_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Point both endpoints at `base` (e.g. a mock server)
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            search_url: format!("{base}/api/s/youtube"),
            download_url: format!("{base}/api/d/ytmp3"),
            ..Self::default()
        }
    }
}

// =============================================================================
// Search
// =============================================================================

/// Envelope of the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub status: bool,
    /// Raw items; each is converted on its own so one odd entry does not
    /// sink the whole page
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// One search hit as the API sends it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    #[serde(default)]
    pub video_id: String,
    pub title: Option<String>,
    pub author: Option<Author>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub seconds: Option<u64>,
    pub timestamp: Option<String>,
    pub duration: Option<DurationInfo>,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Author {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DurationInfo {
    pub seconds: Option<u64>,
    pub timestamp: Option<String>,
}

impl SearchItem {
    /// Convert to a `Track`, filling the usual placeholders
    ///
    /// Returns `None` for items without a video id (channels, playlists).
    pub fn into_track(self) -> Option<Track> {
        if self.video_id.is_empty() {
            return None;
        }

        let duration = self.duration.unwrap_or_default();
        let seconds = self.seconds.or(duration.seconds);
        let label = self
            .timestamp
            .or(duration.timestamp)
            .unwrap_or_else(|| "0:00".to_string());
        let artist = self
            .author
            .and_then(|author| author.name)
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
        let thumbnail = self
            .thumbnail
            .or(self.image)
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

        let title = self.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        let mut track = Track::new(self.video_id, title)
            .with_artist(artist)
            .with_thumbnail(thumbnail)
            .with_duration_label(label)
            .with_source_url(self.url);
        if let Some(seconds) = seconds {
            track = track.with_duration_secs(seconds);
        }
        Some(track)
    }
}

// =============================================================================
// Downloads
// =============================================================================

/// Envelope of the MP3 link endpoint.
#[derive(Debug, Deserialize)]
pub struct DownloadResponse {
    #[serde(default)]
    pub status: bool,
    pub data: Option<DownloadData>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadData {
    pub dl: Option<String>,
    pub title: Option<String>,
}

impl DownloadResponse {
    /// The `dl` link, if present and non-empty
    pub fn link(self) -> Option<String> {
        self.data
            .and_then(|data| data.dl)
            .filter(|dl| !dl.is_empty())
    }
}
