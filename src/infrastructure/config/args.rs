use super::app_config::LogLevel;
use crate::domain::entities::ThemeMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "playground",
    version,
    about = "An interactive terminal playground",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Slideshow auto-advance period in milliseconds.
    #[arg(long, value_name = "MS")]
    pub slide_interval_ms: Option<u64>,

    /// Hold time in milliseconds before a press counts as long.
    #[arg(long, value_name = "MS")]
    pub long_press_ms: Option<u64>,

    /// Primary color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Initial color scheme.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,
}
