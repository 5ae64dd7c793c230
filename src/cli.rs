// CLI module - command-line argument parsing and handlers
//
// Flags override config for a single run; the `config` subcommand manages
// the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// prop-counter - parent/child counters sharing state through a callback
#[derive(Parser, Debug)]
#[command(name = "prop-counter")]
#[command(version = VERSION)]
#[command(about = "Parent/child counter demo for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Replay the scripted session (also PROP_COUNTER_DEMO=1)
    #[arg(long)]
    pub demo: bool,

    /// Run without a terminal UI and log to stdout (also PROP_COUNTER_NO_TUI=1)
    #[arg(long)]
    pub headless: bool,

    /// Color theme: Dark, Light, Monokai, Nord
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply run flags on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.demo {
            config.demo_mode = true;
        }
        if self.headless {
            config.enable_tui = false;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Handle a subcommand. Returns true if one was handled (exit after).
pub fn handle_command(command: &Commands) -> Result<bool> {
    match command {
        Commands::Config { show, reset, path } => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show()?;
            } else if *reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: prop-counter config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path (no home directory)")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Runtime flags are env/CLI only, so they are not part of the file
    println!();
    println!("# Runtime: enable_tui = {}", config.enable_tui);
    println!("# Runtime: demo_mode = {}", config.demo_mode);

    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default().write_to(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_flags_parse_and_override() {
        let cli = Cli::try_parse_from(["prop-counter", "--demo", "--headless", "--theme", "Nord"])
            .unwrap();
        assert!(cli.command.is_none());

        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert!(config.demo_mode);
        assert!(!config.enable_tui);
        assert_eq!(config.theme, "Nord");
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["prop-counter"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_subcommand_parses() {
        let cli = Cli::try_parse_from(["prop-counter", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                path: true,
                show: false,
                reset: false
            })
        ));
    }
}
