use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Catalog limits
// =============================================================================

/// Maximum length of a revision tag in bytes
pub const REVISION_MAX_LEN: usize = 4;

/// Maximum length of a software name in bytes
pub const NAME_MAX_LEN: usize = 32;

// =============================================================================
// Fetch-related constants
// =============================================================================

/// Timeout for establishing the connection in milliseconds (10 seconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Timeout for the whole catalog transfer in milliseconds (15 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 15_000;

/// Prefix of the user agent sent with catalog requests
pub const USER_AGENT_PREFIX: &str = "update-check";

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// URL of the catalog document
    pub url: Option<String>,
    /// Accept plain HTTP and invalid certificates
    pub allow_insecure: bool,
    pub fetch: FetchConfig,
}

/// Transport timeouts
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    pub connect_timeout_ms: u64,
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

/// Error raised while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl CheckerConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the default config file.
/// Uses $XDG_CONFIG_HOME/update-check/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/update-check/config.json,
/// or ./update-check/config.json if neither is available.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("update-check")
}
