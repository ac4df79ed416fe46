/// Resolved references produced by the resolver and download services
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference the audio output can load (usually a stream URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayableReference(String);

impl PlayableReference {
    /// Wrap a playable URL
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the URL
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a downloadable file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadableReference(String);

impl DownloadableReference {
    /// Wrap a download URL
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the URL
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DownloadableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
