use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URI;
use crate::error::{Error, MISSING_API_KEY};

/// Environment variable holding the API key when none is passed explicitly
pub const API_KEY_ENV: &str = "EVENTIFY_PRO_API_KEY";

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "EVENTIFY_CONFIG";

/// Pick the credential: an explicit value wins (even when empty), then the environment.
pub fn resolve_api_key(explicit: Option<String>, from_env: Option<String>) -> crate::error::Result<String> {
    match explicit.or(from_env) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(Error::Configuration(MISSING_API_KEY.to_string())),
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// CLI configuration, read from `eventify.yaml`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Falls back to EVENTIFY_PRO_API_KEY when unset
    pub api_key: Option<String>,
    pub base_uri: String,
    pub raise_errors: bool,
    /// Log successful publishes too, not only failures
    pub log_successes: bool,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_uri: DEFAULT_BASE_URI.to_string(),
            raise_errors: false,
            log_successes: true,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            let path = Self::expand_path(path);
            return Self::load_from_file(&path).context(format!("Failed to load config from {}", path.display()));
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let path = Self::expand_path(Path::new(&env_path));
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", CONFIG_ENV, e);
                    }
                }
            }
        }

        // Try ~/.config/eventify/eventify.yaml
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("eventify").join("eventify.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Try ./eventify.yaml (for development)
        let local_config = PathBuf::from("eventify.yaml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Copy of the config that is safe to print
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.api_key = config.api_key.as_deref().map(redact);
        config
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}

/// Keep the first four characters of a key, mask the rest
pub fn redact(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}
