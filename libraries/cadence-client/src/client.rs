//! Media API client.

use crate::error::{ClientError, Result};
use crate::types::{ApiConfig, DownloadResponse, SearchItem, SearchResponse};
use cadence_core::Track;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the search and MP3 link endpoints.
///
/// Cheap to clone; clones share the connection pool.
///
/// # Example
///
/// ```ignore
/// use cadence_client::{ApiConfig, MediaApiClient};
///
/// let client = MediaApiClient::new(ApiConfig::default())?;
///
/// let tracks = client.search_tracks("popular songs 2025").await?;
/// println!("Found {} tracks", tracks.len());
///
/// let link = client.mp3_link(tracks[0].source_url()).await?;
/// println!("Stream from {}", link);
/// ```
#[derive(Debug, Clone)]
pub struct MediaApiClient {
    http: Client,
    config: ApiConfig,
}

impl MediaApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        validate_endpoint("search_url", &config.search_url)?;
        validate_endpoint("download_url", &config.download_url)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(format!("Cadence/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Search for tracks.
    ///
    /// Items the API returns without a video id are dropped, as are items
    /// that do not parse. A `status: false` answer is `NoResults`.
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        debug!(url = %self.config.search_url, query, "Searching");

        let response = self
            .http
            .get(&self.config.search_url)
            .query(&[("query", query)])
            .send()
            .await?;
        let body: SearchResponse = parse_json(response, "search").await?;

        if !body.status {
            return Err(ClientError::NoResults(query.to_string()));
        }

        let total = body.data.len();
        let tracks: Vec<Track> = body
            .data
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<SearchItem>(value) {
                Ok(item) => item.into_track(),
                Err(err) => {
                    warn!(error = %err, "Skipping unparseable search item");
                    None
                }
            })
            .collect();

        info!(query, results = tracks.len(), skipped = total - tracks.len(), "Search complete");
        Ok(tracks)
    }

    /// Fetch the MP3 link for a source video URL.
    pub async fn mp3_link(&self, source_url: &str) -> Result<String> {
        if source_url.is_empty() {
            return Err(ClientError::InvalidUrl("track has no source URL".into()));
        }

        debug!(url = %self.config.download_url, source = %source_url, "Requesting MP3 link");

        let response = self
            .http
            .get(&self.config.download_url)
            .query(&[("url", source_url)])
            .send()
            .await?;
        let body: DownloadResponse = parse_json(response, "download").await?;

        body.link()
            .ok_or_else(|| ClientError::MissingDownloadUrl(source_url.to_string()))
    }
}

/// Endpoints must be absolute http(s) URLs
fn validate_endpoint(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ClientError::InvalidUrl(format!("{name} cannot be empty")));
    }

    let url = Url::parse(value)
        .map_err(|e| ClientError::InvalidUrl(format!("{name}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ClientError::InvalidUrl(format!(
            "{name} must start with http:// or https://, got {scheme}://"
        ))),
    }
}

/// Check the status and decode a JSON body
async fn parse_json<T: serde::de::DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(ClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {what} response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_validation() {
        assert!(MediaApiClient::new(ApiConfig::default()).is_ok());
        assert!(MediaApiClient::new(ApiConfig::with_base_url("http://localhost:8080")).is_ok());

        let mut config = ApiConfig::default();
        config.search_url = String::new();
        assert!(matches!(
            MediaApiClient::new(config),
            Err(ClientError::InvalidUrl(msg)) if msg.contains("empty")
        ));

        let mut config = ApiConfig::default();
        config.download_url = "ftp://example.com/dl".into();
        assert!(MediaApiClient::new(config).is_err());

        let mut config = ApiConfig::default();
        config.search_url = "not-a-url".into();
        assert!(MediaApiClient::new(config).is_err());
    }
}
