// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks, demo actions)
// - Redrawing when component state changes

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod reactive;
pub mod theme;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::events::Action;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long one input poll may block before yielding to ticks and demo actions
const INPUT_POLL: Duration = Duration::from_millis(10);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal when
/// done (also when the loop fails). `action_rx` carries scripted actions in
/// demo mode; it is simply idle otherwise.
pub async fn run_tui(
    mut action_rx: mpsc::Receiver<Action>,
    log_buffer: LogBuffer,
    config: Config,
) -> Result<()> {
    let mouse = config.features.mouse;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    tracing::info!(theme = app.theme_kind().name(), "TUI started");

    let tick = Duration::from_millis(config.tick_rate_ms);
    let result = run_event_loop(&mut terminal, &mut app, &mut action_rx, tick).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!(
        parent = app.parent().value(),
        child = app.parent().child().value(),
        "TUI stopped"
    );
    result
}

/// Main event loop
///
/// Waits on three sources:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (toast expiry, new log lines)
/// 3. Demo actions
///
/// The frame is only redrawn when the app reports that something changed.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    action_rx: &mut mpsc::Receiver<Action>,
    tick: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick);
    let mut demo_open = true;

    loop {
        if app.needs_redraw() {
            terminal
                .draw(|f| {
                    app.set_frame_area(f.area());
                    views::draw(f, app);
                })
                .context("Failed to draw terminal")?;
            app.mark_drawn();
        }

        tokio::select! {
            // Keyboard or mouse input
            input = async { poll_input() } => {
                match input.context("Failed to read terminal input")? {
                    Some(Event::Key(key)) => app.handle_key(key),
                    Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
                    // New size is picked up by set_frame_area on the next draw
                    Some(Event::Resize(width, height)) => {
                        app.set_frame_area(ratatui::layout::Rect::new(0, 0, width, height));
                    }
                    _ => {}
                }
            }

            _ = tick_interval.tick() => app.on_tick(),

            // Demo script; once it hangs up, stop polling the channel
            action = action_rx.recv(), if demo_open => match action {
                Some(action) => app.apply(action),
                None => demo_open = false,
            },
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Poll for one terminal event without blocking for long
fn poll_input() -> io::Result<Option<Event>> {
    if event::poll(INPUT_POLL)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}
