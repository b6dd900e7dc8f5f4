//! Infrastructure layer with configuration and platform adapters.

/// Monotonic clock adapter.
pub mod clock;
/// Application configuration.
pub mod config;
/// Random color adapter.
pub mod random_color;

pub use clock::SystemClock;
pub use config::{
    AppConfig, CliArgs, LoadedConfig, LogLevel, StorageManager, load_startup_config,
};
pub use random_color::RandomColorSource;
