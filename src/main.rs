use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use playground::application::PageController;
use playground::domain::PageState;
use playground::domain::ports::Clock;
use playground::infrastructure::{
    AppConfig, CliArgs, LoadedConfig, RandomColorSource, StorageManager, SystemClock,
    load_startup_config,
};
use playground::presentation::content::{default_accordion, default_tabs};
use playground::presentation::theme::parse_color;
use playground::presentation::{App, TerminalPresenter};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<LoadedConfig> {
    let args = CliArgs::parse();
    Ok(load_startup_config(StorageManager::new(), args)?)
}

fn create_controller(config: &AppConfig, clock: &dyn Clock) -> Result<PageController> {
    let state = PageState::new(
        config.theme.mode,
        default_tabs()?,
        config.gallery.slides.clone(),
        default_accordion(),
    )?;
    let controller = PageController::new(
        state,
        config.controller_settings(),
        Box::new(RandomColorSource::new()),
        clock.now(),
    )?;
    Ok(controller)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let loaded = load_config()?;
    init_logging(&loaded.config)?;
    loaded.log_fallbacks();
    let config = loaded.config;

    info!(version = playground::VERSION, "Starting {}", playground::NAME);
    if config.gallery.slides.len() == 1 {
        warn!("Gallery has a single slide; auto-advance will not change it");
    }

    let clock = Arc::new(SystemClock::new());
    let controller = create_controller(&config, clock.as_ref())?;

    let terminal = ratatui::init();
    if config.mouse {
        execute!(std::io::stdout(), EnableMouseCapture)?;
    }

    let presenter = TerminalPresenter::new(terminal, parse_color(&config.theme.accent_color));
    let app = App::new(controller, presenter, clock, config.double_click_window());
    let result = app.run().await;

    if config.mouse {
        execute!(std::io::stdout(), DisableMouseCapture)?;
    }
    ratatui::restore();

    result
}
