//! `[logging]` section: filter level and the optional JSON log file
//!
//! The file layer is off unless `file_enabled = true`. When on, the rotation
//! picks which `tracing_appender::rolling` constructor `main` uses.

use serde::Deserialize;
use std::path::PathBuf;

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for the lifetime of the install
    Never,
}

impl LogRotation {
    const ALL: [LogRotation; 3] = [Self::Hourly, Self::Daily, Self::Never];

    /// Case-insensitive lookup; `None` for names we don't know
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rotation| rotation.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Name as written in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// EnvFilter level for this crate (`RUST_LOG` wins over it)
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// Appender file name prefix; the date suffix is added on rotation
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: env!("CARGO_PKG_NAME").into(),
        }
    }
}

/// The `[logging]` table as it appears on disk; every key optional
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<PathBuf>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Fill the gaps in the file's `[logging]` table from the defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let Some(file) = file else {
            return Self::default();
        };
        let defaults = Self::default();

        let file_rotation = match file.file_rotation.as_deref() {
            None => defaults.file_rotation,
            // Config loads before tracing is set up, so this goes to stderr
            Some(name) => LogRotation::parse(name).unwrap_or_else(|| {
                eprintln!(
                    "Warning: Unknown file_rotation {:?}, using {}",
                    name,
                    defaults.file_rotation.as_str()
                );
                defaults.file_rotation
            }),
        };

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.unwrap_or(defaults.file_dir),
            file_rotation,
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}
