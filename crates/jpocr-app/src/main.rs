use std::sync::Arc;

use anyhow::Context;
use jpocr_config::Config;

pub mod controller;
pub mod events;
pub mod icon;
pub mod logging;
#[cfg(target_os = "macos")]
pub mod platform;
pub mod routing;
pub mod state;
#[cfg(target_os = "macos")]
pub mod tray;


use self::controller::{AppController, system_cycle};
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logging::init();

    let config = Config::new();
    tracing::debug!("Effective config: {}", config.to_json());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("jpocr-worker")
        .build()
        .context("Failed to start tokio runtime")?;

    let cycle = system_cycle(&config);
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state.clone(), cycle);

    run(runtime, controller, &state.config)
}

#[cfg(target_os = "macos")]
fn run(
    runtime: tokio::runtime::Runtime,
    controller: AppController,
    config: &Config,
) -> anyhow::Result<()> {
    platform::run(runtime, controller, config)
}

#[cfg(not(target_os = "macos"))]
fn run(
    _runtime: tokio::runtime::Runtime,
    _controller: AppController,
    _config: &Config,
) -> anyhow::Result<()> {
    anyhow::bail!("jpocr needs macOS: the status item, global hotkey and Vision OCR are macOS services")
}
