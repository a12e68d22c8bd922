//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::view::PageSize;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API the dashboard reads from
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Table and page-title settings
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Initial rows per page; coerced into the allowed set
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Appended to every page title
    #[serde(default = "default_title_suffix")]
    pub title_suffix: String,
}

fn default_page_size() -> usize {
    PageSize::default().get()
}

fn default_title_suffix() -> String {
    "Fleet Dashboard".to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            title_suffix: default_title_suffix(),
        }
    }
}

impl ViewConfig {
    /// Initial page size, nearest allowed value to the configured one
    pub fn page_size(&self) -> PageSize {
        PageSize::nearest(self.page_size)
    }

    /// Full page title for a screen-specific prefix
    pub fn title(&self, prefix: &str) -> String {
        format!("{} | {}", prefix, self.title_suffix)
    }
}

/// Fixture API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Simulated latency of each store lookup, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            latency_ms: 0,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here: the subscriber usually depends on the result,
    /// so call [`LoadedConfig::report`] once logging is up.
    pub fn load_default() -> LoadedConfig {
        Self::load_first(&default_paths())
    }

    /// Load the first existing file in `paths` that parses
    ///
    /// Files that exist but fail to load are skipped and recorded.
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(url) = lookup("FLEETVIEW_API_URL") {
            self.api.base_url = url;
        }

        // View overrides
        if let Some(size) = lookup("FLEETVIEW_PAGE_SIZE") {
            if let Ok(size) = size.parse() {
                self.view.page_size = size;
            }
        }
        if let Some(suffix) = lookup("FLEETVIEW_TITLE") {
            self.view.title_suffix = suffix;
        }

        // Server overrides
        if let Some(host) = lookup("FLEETVIEW_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FLEETVIEW_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(latency) = lookup("FLEETVIEW_LATENCY_MS") {
            if let Ok(ms) = latency.parse() {
                self.server.latency_ms = ms;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("FLEETVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FLEETVIEW_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Standard config file locations, most specific first
pub fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("fleetview").join("config.toml")),
        Some(PathBuf::from("/etc/fleetview/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Result of searching the config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Log where the config came from and every file that was skipped
    pub fn report(&self) {
        for error in &self.skipped {
            tracing::warn!("Skipping config file: {}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Fleetview Configuration
#
# Environment variables override these settings:
# - FLEETVIEW_API_URL
# - FLEETVIEW_PAGE_SIZE
# - FLEETVIEW_TITLE
# - FLEETVIEW_HOST
# - FLEETVIEW_PORT
# - FLEETVIEW_LATENCY_MS
# - FLEETVIEW_LOG_LEVEL
# - FLEETVIEW_LOG_FORMAT

[api]
# Base URL of the fleet API
base_url = "http://localhost:8080"

[view]
# Rows per page: 3, 5, 10 or 25 (other values snap to the nearest)
page_size = 5

# Appended to every page title
title_suffix = "Fleet Dashboard"

[server]
# Fixture API bind address
host = "127.0.0.1"
port = 8080

# Simulated latency per store lookup (ms)
latency_ms = 0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
