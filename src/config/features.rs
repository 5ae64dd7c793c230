//! Feature flags configuration
//!
//! Feature flags for optional UI pieces (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional UI pieces (opt-out: default enabled)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    /// System Logs panel under the counters
    pub logs_panel: bool,

    /// Toast notification when the child sends its count
    pub toasts: bool,

    /// Mouse capture for clicking buttons
    pub mouse: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            logs_panel: true,
            toasts: true,
            mouse: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub logs_panel: Option<bool>,
    pub toasts: Option<bool>,
    pub mouse: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            logs_panel: file.logs_panel.unwrap_or(defaults.logs_panel),
            toasts: file.toasts.unwrap_or(defaults.toasts),
            mouse: file.mouse.unwrap_or(defaults.mouse),
        }
    }
}
