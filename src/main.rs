// prop-counter - parent/child counters sharing state through a callback prop
//
// Two components compose in a strict parent-owns-child relationship. The
// child counts on its own and can send its value up through a callback the
// parent supplied; the parent overwrites its own counter with whatever it
// receives.
//
// Architecture:
// - TUI (ratatui): Draws the components, routes keyboard and mouse input
// - Reactive primitives: Component state plus a re-render signal
// - Demo script: Sends scripted actions to the TUI over an mpsc channel
// - Headless mode: Replays the script without a terminal, logging to stdout

mod cli;
mod config;
mod demo;
mod events;
mod logging;
mod startup;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::{mpsc, oneshot};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Demo actions are tiny and paced by humans; a short buffer is plenty
const ACTION_BUFFER: usize = 16;

/// Initialize tracing with conditional output
///
/// In TUI mode logs go to the in-memory buffer (prevents garbling the
/// display); in headless mode they go to stdout. File logging optionally adds
/// rotating JSON files on top of either.
///
/// The returned guard must be kept alive for the duration of the program so
/// buffered file logs are flushed.
fn init_tracing(config: &Config, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("prop_counter={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = config
        .enable_tui
        .then(|| TuiLogLayer::new(log_buffer.clone()));
    let stdout_layer = (!config.enable_tui).then(|| tracing_subscriber::fmt::layer());

    let (file_layer, guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };

                // Writes happen on a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                // Fall back to non-file logging
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle subcommands first (config --show, --reset, --path)
    if let Some(command) = &cli.command {
        if cli::handle_command(command)? {
            return Ok(());
        }
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration, then let flags win for this run
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer);

    if !config.enable_tui {
        startup::print_startup(&config);
        tracing::info!("TUI disabled, replaying the demo session headless");
        let outcome = demo::run_headless(&config);
        println!("parent = {}, child = {}", outcome.parent, outcome.child);
        return Ok(());
    }

    startup::log_startup(&config);

    // Demo actions reach the UI over this channel. Without a demo the sender
    // is dropped right away and the event loop stops listening.
    let (action_tx, action_rx) = mpsc::channel(ACTION_BUFFER);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let demo_handle = if config.demo_mode {
        tracing::info!("Running in DEMO MODE - replaying scripted session");
        Some(tokio::spawn(demo::run_demo(action_tx, shutdown_rx)))
    } else {
        drop(action_tx);
        None
    };

    // Run the TUI in the main task; returns when the user quits
    let result = tui::run_tui(action_rx, log_buffer, config).await;

    // The demo may still be mid-script; if it already finished the send fails
    let _ = shutdown_tx.send(());
    if let Some(handle) = demo_handle {
        let _ = handle.await;
    }

    tracing::info!("Shutdown complete");
    result
}
