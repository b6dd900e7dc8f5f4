//! Application configuration.

use crate::application::ControllerSettings;
use crate::domain::entities::{Slide, ThemeMode};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const APP_NAME: &str = "playground";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Slideshow configuration.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Pointer timing configuration.
    #[serde(default)]
    pub interaction: InteractionConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Slideshow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Auto-advance period in milliseconds.
    #[serde(default = "default_slide_interval_ms")]
    pub interval_ms: u64,

    /// Images, in display order. Must not be empty.
    #[serde(default = "default_slides")]
    pub slides: Vec<Slide>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_slide_interval_ms(),
            slides: default_slides(),
        }
    }
}

/// Pointer timing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Hold time in milliseconds before a press counts as long.
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,

    /// Maximum gap in milliseconds between the presses of a double click.
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            long_press_ms: default_long_press_ms(),
            double_click_ms: default_double_click_ms(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Acknowledgment duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_duration: default_notification_duration(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Primary color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Initial scheme.
    #[serde(default)]
    pub mode: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

fn default_accent_color() -> String {
    "#3498db".to_string()
}

fn default_true() -> bool {
    true
}

fn default_slide_interval_ms() -> u64 {
    5000
}

fn default_long_press_ms() -> u64 {
    1000
}

fn default_double_click_ms() -> u64 {
    400
}

fn default_notification_duration() -> u64 {
    5
}

/// Slides shown when the configuration does not list any.
#[must_use]
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new("Mountains", "Snow caps catching the first light"),
        Slide::new("Ocean", "Waves rolling onto a quiet beach"),
        Slide::new("Forest", "Morning fog between the pines"),
        Slide::new("City", "Skyline after the rain"),
    ]
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(interval) = args.slide_interval_ms.filter(|&ms| ms > 0) {
            self.gallery.interval_ms = interval;
        }
        if let Some(long_press) = args.long_press_ms {
            self.interaction.long_press_ms = long_press;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(mode) = args.theme {
            self.theme.mode = mode;
        }
    }

    /// Timing settings for the page controller.
    #[must_use]
    pub const fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            slide_interval: Duration::from_millis(self.gallery.interval_ms),
            long_press: Duration::from_millis(self.interaction.long_press_ms),
            notification_duration: Duration::from_secs(self.ui.notification_duration),
        }
    }

    /// Maximum gap between the presses of a double click.
    #[must_use]
    pub const fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.interaction.double_click_ms)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("playground.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            gallery: GalleryConfig::default(),
            interaction: InteractionConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_sections() {
        let toml_content = r##"
            log_level = "debug"

            [gallery]
            interval_ms = 2500

            [[gallery.slides]]
            title = "Only"

            [interaction]
            long_press_ms = 750

            [theme]
            accent_color = "#ff8800"
            mode = "dark"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.gallery.interval_ms, 2500);
        assert_eq!(config.gallery.slides, vec![Slide::new("Only", "")]);
        assert_eq!(config.interaction.long_press_ms, 750);
        assert_eq!(config.interaction.double_click_ms, 400);
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert!(config.mouse);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        let settings = config.controller_settings();

        assert_eq!(settings.slide_interval, Duration::from_millis(5000));
        assert_eq!(settings.long_press, Duration::from_millis(1000));
        assert_eq!(settings.notification_duration, Duration::from_secs(5));
        assert_eq!(config.gallery.slides.len(), 4);
        assert_eq!(config.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn test_merge_with_args_overrides() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Trace),
            mouse: Some(false),
            slide_interval_ms: Some(100),
            long_press_ms: None,
            accent_color: None,
            theme: Some(ThemeMode::Dark),
        };

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(!config.mouse);
        assert_eq!(config.gallery.interval_ms, 100);
        assert_eq!(config.interaction.long_press_ms, 1000);
        assert_eq!(config.theme.mode, ThemeMode::Dark);
    }
}
