//! Application configuration file.
//!
//! Stored as JSON in the platform config directory. A missing file means
//! defaults; command-line flags override individual values.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use moodscope_core::history::DEFAULT_CAPACITY;
use moodscope_core::AnalyzerConfig;
use moodscope_server::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// History settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySection {
    /// Entries kept.
    pub capacity: usize,
    /// Database file (None = platform data directory).
    pub db_path: Option<PathBuf>,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            db_path: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analyzer: AnalyzerConfig,
    pub server: ServerSection,
    pub history: HistorySection,
}

impl AppConfig {
    /// Default config file location.
    pub fn default_path() -> Result<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "moodscope", "moodscope").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Loads the config from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Loads from `path` if given, else from the default location.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load(&Self::default_path()?),
        }
    }

    /// Server settings for `moodscope serve`.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            db_path: self.history.db_path.clone(),
            ..ServerConfig::default()
        }
        .with_host(self.server.host.clone())
        .with_port(self.server.port)
        .with_history_capacity(self.history.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodscope_core::TiePolicy;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.history.capacity, 10);
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.analyzer.tie_policy = TiePolicy::Mixed;
        config.server.port = 9100;
        config.history.db_path = Some(dir.path().join("history.db"));
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"server": {"port": 8080}}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.analyzer.emoji_aware);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_server_config() {
        let mut config = AppConfig::default();
        config.server.host = "0.0.0.0".into();
        config.history.capacity = 25;

        let server = config.server_config();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 9001);
        assert_eq!(server.history_capacity, 25);
        assert!(server.db_path.is_none());
    }
}
