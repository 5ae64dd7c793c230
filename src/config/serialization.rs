//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    ///
    /// Used both for the first-run template and for `config --reset`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# prop-counter configuration
# Precedence: command-line flags > environment variables > this file > defaults

# Theme: Dark, Light, Monokai, Nord (press 't' in the TUI to cycle)
theme = {theme:?}

# Redraw tick in milliseconds (expires toasts, picks up new log lines)
tick_rate_ms = {tick_rate_ms}

# Feature flags
[features]
logs_panel = {logs_panel}   # System Logs panel under the counters
toasts = {toasts}       # Toast when the child sends its count
mouse = {mouse}        # Click buttons with the mouse

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level:?}
# File logging (JSON lines, in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix:?}
"#,
            theme = self.theme,
            tick_rate_ms = self.tick_rate_ms,
            logs_panel = self.features.logs_panel,
            toasts = self.features.toasts,
            mouse = self.features.mouse,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
