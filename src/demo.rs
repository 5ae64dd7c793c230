// Demo mode: replay a scripted counter session
//
// The script walks through the interaction the components exist to show:
// the parent counts up, the child counts up on its own, the child sends its
// value (overwriting the parent), and the parent carries on from there.
//
// In the TUI the script runs as a separate task that only sends `Action`s
// over a channel. Headless mode applies the same script to an `App` directly.
//
// Run with: PROP_COUNTER_DEMO=1 cargo run --release

use crate::config::Config;
use crate::events::Action;
use crate::logging::LogBuffer;
use crate::tui::app::App;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::time::sleep;

/// Let the first frame render before the script starts
const INITIAL_DELAY: Duration = Duration::from_millis(1500);

/// The scripted session: each action followed by a pause
pub fn scenario() -> Vec<(Action, Duration)> {
    let beat = Duration::from_millis(600);
    let pause = Duration::from_millis(1200);

    vec![
        // Parent: 0 → 3
        (Action::ParentIncrement, beat),
        (Action::ParentIncrement, beat),
        (Action::ParentIncrement, pause),
        // Child: 0 → 2, parent untouched
        (Action::FocusNext, beat),
        (Action::ChildIncrement, beat),
        (Action::ChildIncrement, pause),
        // Child sends 2: parent overwritten 3 → 2
        (Action::ChildReport, pause),
        // Parent: 2 → 3, child still 2
        (Action::FocusPrev, beat),
        (Action::ParentIncrement, pause),
    ]
}

/// Send the scripted actions to the TUI, pacing them for a human viewer
///
/// Stops early if the UI goes away or a shutdown is signalled. Returning
/// drops `tx`, which tells the event loop the script is finished.
pub async fn run_demo(tx: mpsc::Sender<Action>, shutdown_rx: oneshot::Receiver<()>) {
    play(tx, shutdown_rx, scenario(), INITIAL_DELAY).await;
}

async fn play(
    tx: mpsc::Sender<Action>,
    mut shutdown_rx: oneshot::Receiver<()>,
    steps: Vec<(Action, Duration)>,
    initial_delay: Duration,
) {
    tokio::select! {
        _ = &mut shutdown_rx => return,
        _ = sleep(initial_delay) => {}
    }

    for (action, delay) in steps {
        if tx.send(action).await.is_err() {
            tracing::debug!("Demo receiver closed");
            return;
        }

        tokio::select! {
            _ = &mut shutdown_rx => {
                tracing::info!("Demo received shutdown signal");
                return;
            }
            _ = sleep(delay) => {}
        }
    }

    tracing::info!("Demo script finished");
}

/// Final counter values after a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub parent: u64,
    pub child: u64,
}

/// Apply the scripted session without a terminal
///
/// Every step is logged by `App::apply`, so the session shows up on stdout
/// (and in the log file when enabled).
pub fn run_headless(config: &Config) -> Outcome {
    let mut app = App::new(config, LogBuffer::new());

    for (action, _) in scenario() {
        app.apply(action);
    }

    let outcome = Outcome {
        parent: app.parent().value(),
        child: app.parent().child().value(),
    };
    tracing::info!(parent = outcome.parent, child = outcome.child, "Headless run finished");
    outcome
}
