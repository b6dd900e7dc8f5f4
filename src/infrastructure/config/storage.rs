use super::app_config::{AppConfig, default_slides};
use super::args::CliArgs;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "playground";
const CONFIG_FILE_NAME: &str = "config.toml";
const FALLBACK_SLIDE_INTERVAL_MS: u64 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that was replaced by a default while loading.
///
/// Loading happens before logging is set up, so these are collected and
/// logged afterwards with [`LoadedConfig::log_fallbacks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFallback {
    /// No platform config directory could be determined.
    NoConfigDir,
    /// The config file does not exist.
    NotFound(PathBuf),
    /// The config file is not valid TOML for [`AppConfig`].
    Malformed { path: PathBuf, reason: String },
    /// The gallery listed no slides.
    EmptySlides,
    /// The gallery interval was zero.
    ZeroInterval,
}

impl ConfigFallback {
    /// Emits the fallback through `tracing`.
    pub fn log(&self) {
        match self {
            Self::NoConfigDir => {
                warn!("Could not determine the config directory, using defaults.");
            }
            Self::NotFound(path) => {
                info!("Config file not found at {:?}, using defaults.", path);
            }
            Self::Malformed { path, reason } => {
                warn!(path = %path.display(), "Failed to parse config file: {}. Using defaults.", reason);
            }
            Self::EmptySlides => {
                warn!("Config lists no gallery slides, using the built-in set.");
            }
            Self::ZeroInterval => {
                warn!(
                    "Gallery interval must be positive, using {} ms.",
                    FALLBACK_SLIDE_INTERVAL_MS
                );
            }
        }
    }
}

/// Configuration plus the defaults that had to stand in while loading it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub fallbacks: Vec<ConfigFallback>,
}

impl LoadedConfig {
    /// Logs every recorded fallback. Call once a subscriber is installed.
    pub fn log_fallbacks(&self) {
        for fallback in &self.fallbacks {
            fallback.log();
        }
    }
}

pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the application configuration.
    ///
    /// A missing file yields defaults without writing anything. A malformed
    /// file is replaced by defaults. Both are reported as fallbacks.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an existing file cannot be read.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            return Ok(LoadedConfig {
                config: AppConfig::default(),
                fallbacks: vec![ConfigFallback::NotFound(config_path)],
            });
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                return Ok(LoadedConfig {
                    config: AppConfig::default(),
                    fallbacks: vec![ConfigFallback::Malformed {
                        path: config_path,
                        reason: e.to_string(),
                    }],
                });
            }
        };

        let mut fallbacks = Vec::new();
        if config.gallery.slides.is_empty() {
            fallbacks.push(ConfigFallback::EmptySlides);
            config.gallery.slides = default_slides();
        }
        if config.gallery.interval_ms == 0 {
            fallbacks.push(ConfigFallback::ZeroInterval);
            config.gallery.interval_ms = FALLBACK_SLIDE_INTERVAL_MS;
        }

        Ok(LoadedConfig { config, fallbacks })
    }
}

/// Loads the configuration for startup and merges the CLI arguments over it.
///
/// An explicit `--config` path is honored even when no platform config
/// directory exists.
///
/// # Errors
///
/// Returns `ConfigError` if an existing file cannot be read.
pub fn load_startup_config(
    storage: Result<StorageManager, ConfigError>,
    args: CliArgs,
) -> Result<LoadedConfig, ConfigError> {
    let mut loaded = match storage {
        Ok(storage) => storage.load_config(args.config.as_deref())?,
        Err(_) => {
            let mut loaded = match args.config.as_deref() {
                Some(path) => StorageManager::with_dir(PathBuf::new()).load_config(Some(path))?,
                None => LoadedConfig {
                    config: AppConfig::default(),
                    fallbacks: Vec::new(),
                },
            };
            loaded.fallbacks.insert(0, ConfigFallback::NoConfigDir);
            loaded
        }
    };
    loaded.config.merge_with_args(args);
    Ok(loaded)
}
