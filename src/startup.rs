// Startup module - displays banner and feature status
//
// Headless runs print a banner to stdout before the session starts. In the
// TUI the same information goes to the System Logs panel instead, since the
// alternate screen would swallow anything printed.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// One line of the feature list
struct FeatureStatus {
    name: &'static str,
    enabled: bool,
    description: &'static str,
}

fn feature_status(config: &Config) -> Vec<FeatureStatus> {
    let features = &config.features;
    vec![
        FeatureStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        FeatureStatus {
            name: "logs-panel",
            enabled: features.logs_panel && config.enable_tui,
            description: "System Logs panel",
        },
        FeatureStatus {
            name: "toasts",
            enabled: features.toasts && config.enable_tui,
            description: "Report notifications",
        },
        FeatureStatus {
            name: "mouse",
            enabled: features.mouse && config.enable_tui,
            description: "Clickable buttons",
        },
        FeatureStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: "JSON log files",
        },
    ]
}

/// Print the startup banner (headless mode)
pub fn print_startup(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}prop-counter{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Parent/child counters wired through a callback prop{RESET}");
    println!();

    match Config::config_path() {
        Some(path) if path.exists() => {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display())
        }
        _ => println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}"),
    }
    println!();

    for feature in feature_status(config) {
        let (icon, style) = if feature.enabled {
            (format!("{GREEN}✓{RESET}"), "")
        } else {
            (format!("{DIM}○{RESET}"), DIM)
        };
        println!(
            "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
            feature.name, feature.description
        );
    }
    println!();

    if config.demo_mode {
        println!("  {YELLOW}▸{RESET} {YELLOW}Demo mode{RESET} {DIM}(scripted session){RESET}");
        println!();
    }
}

/// Log the startup sequence (shown in the System Logs panel)
pub fn log_startup(config: &Config) {
    tracing::info!("prop-counter v{}", VERSION);

    for feature in feature_status(config) {
        let icon = if feature.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, feature.name, feature.description);
    }

    if config.demo_mode {
        tracing::info!("▸ Demo mode active (scripted session)");
    }
    tracing::info!("Ready. Tab to switch focus, q to quit");
}
