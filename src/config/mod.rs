//! Configuration for the counter demo
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by `main` after loading)
//! 2. Environment variables
//! 3. Config file (~/.config/prop-counter/config.toml)
//! 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::tui::theme::ThemeKind;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod features;
mod observability;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use features::{Features, FileFeatures};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default redraw tick
const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Ticks faster than this just burn CPU
const MIN_TICK_RATE_MS: u64 = 16;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "Dark", "Light", "Monokai", "Nord"
    pub theme: String,

    /// Redraw tick interval in milliseconds
    pub tick_rate_ms: u64,

    /// Whether to enable the TUI (disabled for headless mode)
    pub enable_tui: bool,

    /// Demo mode: replay the scripted counter scenario
    pub demo_mode: bool,

    /// Feature flags for optional UI pieces
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default().name().to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            enable_tui: true,
            demo_mode: false,
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub tick_rate_ms: Option<u64>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Parse the text of a config file
pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
    toml::from_str(contents).context("invalid TOML in config file")
}

/// Env flags accept `1` or `true` (any case)
fn env_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/prop-counter/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("prop-counter").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Config is optional, so a failed write is not worth stopping for
        if let Err(e) = Self::default().write_to(&path) {
            tracing::debug!(error = %e, "Could not write default config");
        }
    }

    /// Write this config as TOML to `path`, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml())
            .with_context(|| format!("writing config file {}", path.display()))
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read or
    /// parsed is an error: a broken config should fail loudly, not silently
    /// fall back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => parse_file_config(&contents).with_context(|| {
                format!(
                    "failed to parse {} (run `prop-counter config --reset` to restore defaults)",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file config with an environment lookup
    ///
    /// `env` is injected so tests can supply variables without touching the
    /// process environment.
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("PROP_COUNTER_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Tick rate: env > file > default, clamped to something sane
        let tick_rate_ms = env("PROP_COUNTER_TICK_MS")
            .and_then(|v| v.trim().parse().ok())
            .or(file.tick_rate_ms)
            .unwrap_or(defaults.tick_rate_ms)
            .max(MIN_TICK_RATE_MS);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("PROP_COUNTER_NO_TUI")
            .map(|v| !env_flag(&v))
            .unwrap_or(defaults.enable_tui);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("PROP_COUNTER_DEMO")
            .map(|v| env_flag(&v))
            .unwrap_or(defaults.demo_mode);

        Self {
            theme,
            tick_rate_ms,
            enable_tui,
            demo_mode,
            features: Features::from_file(file.features),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Resolve the configured theme name, falling back to the default
    pub fn theme_kind(&self) -> ThemeKind {
        ThemeKind::from_name(&self.theme).unwrap_or_else(|| {
            let fallback = ThemeKind::default();
            tracing::warn!(theme = %self.theme, "Unknown theme, using {}", fallback.name());
            fallback
        })
    }
}
