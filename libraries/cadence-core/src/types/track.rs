/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Artist shown when the search service does not report one
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Thumbnail shown when the search service does not report one
pub const PLACEHOLDER_THUMBNAIL: &str = "/api/placeholder/300/300";

/// A single search result
///
/// Tracks are immutable once built: all fields are private and the `with_*`
/// setters consume the value, so they can only be used while constructing.
/// Two tracks are the same entry for dedup purposes when their ids match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    id: TrackId,
    title: String,
    artist: String,
    thumbnail: String,
    duration_label: String,
    source_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_secs: Option<u64>,
}

impl Track {
    /// Create a track with placeholder metadata
    pub fn new(id: impl Into<TrackId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: UNKNOWN_ARTIST.to_string(),
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            duration_label: "0:00".to_string(),
            source_url: String::new(),
            duration_secs: None,
        }
    }

    /// Set the artist name
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// Set the thumbnail reference
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Set the human-readable duration (e.g. "3:45")
    #[must_use]
    pub fn with_duration_label(mut self, label: impl Into<String>) -> Self {
        self.duration_label = label.into();
        self
    }

    /// Set the URL the resolver and download services work from
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Set the numeric duration in seconds
    #[must_use]
    pub fn with_duration_secs(mut self, secs: u64) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    /// Track identifier
    pub fn id(&self) -> &TrackId {
        &self.id
    }

    /// Track title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artist name
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Thumbnail reference
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    /// Human-readable duration
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    /// Source URL used for resolution and downloads
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Track duration, when the search service reported one
    pub fn duration(&self) -> Option<Duration> {
        self.duration_secs.map(Duration::from_secs)
    }

    /// Whether `other` refers to the same search result
    pub fn same_id(&self, other: &Track) -> bool {
        self.id == other.id
    }
}
