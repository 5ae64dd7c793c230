//! Configuration tests
//!
//! These tests guard the file format: every field written by `to_toml()` must
//! parse back, and every layer (defaults, file, env) must land where expected.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let restored = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(restored, config);
}

/// Every non-default value must survive serialization.
#[test]
fn test_config_roundtrip_custom_values() {
    let config = Config {
        theme: "Nord".to_string(),
        tick_rate_ms: 100,
        features: Features {
            logs_panel: false,
            toasts: false,
            mouse: false,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/tmp/prop counter/logs"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "counter".to_string(),
        },
        ..Config::default()
    };

    let parsed = parse_file_config(&config.to_toml()).unwrap();
    let restored = Config::from_sources(parsed, no_env);

    assert_eq!(restored, config);
}

/// Strings from flags or env are written escaped, so `config --show` stays valid TOML.
#[test]
fn test_quoted_strings_are_escaped() {
    let config = Config {
        theme: r#"No"rd"#.to_string(),
        logging: LoggingConfig {
            file_prefix: r#"a\b"c"#.to_string(),
            ..LoggingConfig::default()
        },
        ..Config::default()
    };

    let parsed = parse_file_config(&config.to_toml()).unwrap();
    assert_eq!(parsed.theme.as_deref(), Some(r#"No"rd"#));

    let restored = Config::from_sources(parsed, no_env);
    assert_eq!(restored.logging.file_prefix, r#"a\b"c"#);
}

#[test]
fn test_write_to_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::default().write_to(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(parse_file_config(&contents).is_ok());
}

// ─────────────────────────────────────────────────────────────────────────────
// Layering tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_sources(parse_file_config("").unwrap(), no_env);
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_overrides_only_named_fields() {
    let file = parse_file_config(
        r#"
theme = "Light"

[features]
toasts = false

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = Config::from_sources(file, no_env);

    assert_eq!(config.theme, "Light");
    assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    assert!(!config.features.toasts);
    assert!(config.features.logs_panel);
    assert!(config.features.mouse);
    assert_eq!(config.logging.level, "warn");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_env_overrides_file() {
    let file = parse_file_config("theme = \"Light\"\ntick_rate_ms = 500\n").unwrap();
    let env = env_from(&[
        ("PROP_COUNTER_THEME", "Monokai"),
        ("PROP_COUNTER_TICK_MS", "40"),
    ]);

    let config = Config::from_sources(file, env);

    assert_eq!(config.theme, "Monokai");
    assert_eq!(config.tick_rate_ms, 40);
}

#[test]
fn test_runtime_flags_from_env() {
    let config = Config::from_sources(
        FileConfig::default(),
        env_from(&[("PROP_COUNTER_DEMO", "TRUE"), ("PROP_COUNTER_NO_TUI", "1")]),
    );
    assert!(config.demo_mode);
    assert!(!config.enable_tui);

    let config = Config::from_sources(
        FileConfig::default(),
        env_from(&[("PROP_COUNTER_DEMO", "0"), ("PROP_COUNTER_NO_TUI", "no")]),
    );
    assert!(!config.demo_mode);
    assert!(config.enable_tui);
}

#[test]
fn test_unparseable_tick_env_falls_through_to_file() {
    let file = parse_file_config("tick_rate_ms = 300").unwrap();
    let config = Config::from_sources(file, env_from(&[("PROP_COUNTER_TICK_MS", "fast")]));
    assert_eq!(config.tick_rate_ms, 300);
}

#[test]
fn test_tick_rate_is_clamped() {
    let file = parse_file_config("tick_rate_ms = 0").unwrap();
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.tick_rate_ms, MIN_TICK_RATE_MS);
}

// ─────────────────────────────────────────────────────────────────────────────
// Invalid input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(parse_file_config("theme = Nord").is_err());
    assert!(parse_file_config("[features]\nmouse = \"yes\"").is_err());
}

#[test]
fn test_unknown_theme_falls_back_to_default() {
    let config = Config {
        theme: "Solarized".to_string(),
        ..Config::default()
    };
    assert_eq!(config.theme_kind(), ThemeKind::Dark);

    let config = Config {
        theme: "nord".to_string(),
        ..Config::default()
    };
    assert_eq!(config.theme_kind(), ThemeKind::Nord);
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("hourly"), Some(LogRotation::Hourly));
    assert_eq!(LogRotation::parse("NEVER"), Some(LogRotation::Never));
    assert_eq!(LogRotation::parse(" Daily "), Some(LogRotation::Daily));
    assert_eq!(LogRotation::parse("weekly"), None);

    for rotation in [LogRotation::Hourly, LogRotation::Daily, LogRotation::Never] {
        assert_eq!(LogRotation::parse(rotation.as_str()), Some(rotation));
    }
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    let file = parse_file_config(
        r#"
[logging]
file_rotation = "weekly"
file_prefix = "counter"
"#,
    )
    .unwrap();

    let config = Config::from_sources(file, no_env);

    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    assert_eq!(config.logging.file_prefix, "counter");
}
