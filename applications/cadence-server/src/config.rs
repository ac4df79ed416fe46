/// Server configuration
use crate::error::{Result, ServerError};
use cadence_client::ApiConfig;
use cadence_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Default config file, read when present
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default = "default_player")]
    pub player: PlayerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    /// Query used when `/search` has none, and for the startup search
    #[serde(default = "default_search")]
    pub default_search: String,

    /// Run `default_search` once at startup
    #[serde(default = "default_preload")]
    pub preload: bool,

    #[serde(default = "default_max_recent_items")]
    pub max_recent_items: usize,

    #[serde(default = "default_max_queue_items")]
    pub max_queue_items: usize,
}

impl PlayerSettings {
    /// Controller configuration for these settings
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            history_size: self.max_recent_items,
            preview_size: self.max_queue_items,
            ..PlaybackConfig::default()
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` if given (it must exist), otherwise `config.toml` when
    /// present. Environment variables prefixed with `CADENCE_` override file
    /// values, with `__` between sections: `CADENCE_SERVER__PORT=9000`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CADENCE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid host address: {}",
                self.server.host
            )));
        }

        if self.api.search_url.is_empty() || self.api.download_url.is_empty() {
            return Err(ServerError::Config(
                "API endpoints are required (set [api] search_url and download_url)".to_string(),
            ));
        }

        if self.player.max_recent_items == 0 {
            return Err(ServerError::Config(
                "player.max_recent_items must be at least 1".to_string(),
            ));
        }

        if self.player.max_queue_items == 0 {
            return Err(ServerError::Config(
                "player.max_queue_items must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_player() -> PlayerSettings {
    PlayerSettings {
        default_search: default_search(),
        preload: default_preload(),
        max_recent_items: default_max_recent_items(),
        max_queue_items: default_max_queue_items(),
    }
}

fn default_search() -> String {
    "popular songs 2025".to_string()
}

fn default_preload() -> bool {
    true
}

fn default_max_recent_items() -> usize {
    cadence_playback::DEFAULT_HISTORY_SIZE
}

fn default_max_queue_items() -> usize {
    cadence_playback::DEFAULT_PREVIEW_SIZE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            api: ApiConfig::default(),
            player: default_player(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.player.max_recent_items, 10);
        assert_eq!(config.player.max_queue_items, 5);
        assert_eq!(config.player.default_search, "popular songs 2025");
    }

    #[test]
    fn loads_partial_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9100

[api]
search_url = "http://127.0.0.1:9200/search"

[player]
max_queue_items = 3
"#
        )
        .unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.api.search_url, "http://127.0.0.1:9200/search");
        assert_eq!(config.api.download_url, cadence_client::DEFAULT_DOWNLOAD_URL);
        assert_eq!(config.player.max_queue_items, 3);
        assert_eq!(config.player.max_recent_items, 10);
        assert_eq!(config.player.playback_config().preview_size, 3);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = ServerConfig::load(Some(Path::new("/nonexistent/cadence.toml")));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }

    #[test]
    fn rejects_zero_capacities_and_bad_host() {
        let mut config = ServerConfig::default();
        config.player.max_recent_items = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.player.max_queue_items = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.server.host = "not an address".into();
        assert!(config.validate().is_err());
    }
}
