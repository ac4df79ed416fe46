//! Error types for the media API client.

use cadence_core::CadenceError;
use thiserror::Error;

/// Errors that can occur when talking to the media API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid endpoint or source URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API answered with `status: false`
    #[error("No results for {0:?}")]
    NoResults(String),

    /// Download response carried no `dl` link
    #[error("No download link for {0}")]
    MissingDownloadUrl(String),
}

impl ClientError {
    pub(crate) fn into_search(self) -> CadenceError {
        CadenceError::search(self.to_string())
    }

    pub(crate) fn into_resolution(self) -> CadenceError {
        CadenceError::resolution(self.to_string())
    }

    pub(crate) fn into_download(self) -> CadenceError {
        CadenceError::download(self.to_string())
    }
}

/// Result type for media API operations.
pub type Result<T> = std::result::Result<T, ClientError>;
