//! Configuration tests
//!
//! Round-trip guards keep `to_toml()` and `FileConfig` in sync: a field added
//! to one but not the other fails here.

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved.step_delay_ms, config.step_delay_ms);
    assert_eq!(resolved.random_len, config.random_len);
    assert_eq!(resolved.theme, config.theme);
    assert_eq!(resolved.logging.file_rotation, config.logging.file_rotation);
    assert_eq!(resolved.logging.file_prefix, config.logging.file_prefix);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.step_delay_ms = 250;
    config.random_len = 10;
    config.theme = "Terminal".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).expect("custom config parses");
    let resolved = Config::resolve(file, no_env);

    assert_eq!(resolved.step_delay_ms, 250);
    assert_eq!(resolved.random_len, 10);
    assert_eq!(resolved.theme, "Terminal");
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = FileConfig {
        step_delay_ms: Some(500),
        theme: Some("Spy Light".to_string()),
        ..Default::default()
    };
    let env = env_from(&[
        ("SEARCHLIGHT_STEP_DELAY_MS", "40"),
        ("SEARCHLIGHT_THEME", "Terminal"),
    ]);

    let config = Config::resolve(file, env);
    assert_eq!(config.step_delay_ms, 40);
    assert_eq!(config.step_delay(), Duration::from_millis(40));
    assert_eq!(config.theme, "Terminal");
}

#[test]
fn test_unparseable_env_falls_through_to_file() {
    let file = FileConfig {
        step_delay_ms: Some(300),
        ..Default::default()
    };
    let config = Config::resolve(file, env_from(&[("SEARCHLIGHT_STEP_DELAY_MS", "fast")]));
    assert_eq!(config.step_delay_ms, 300);
}

#[test]
fn test_empty_file_gives_defaults() {
    let file: FileConfig = toml::from_str("").unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.step_delay_ms, 1000);
    assert_eq!(config.random_len, 6);
    assert_eq!(config.theme, "Spy Dark");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_random_len_is_clamped() {
    let zero = FileConfig {
        random_len: Some(0),
        ..Default::default()
    };
    assert_eq!(Config::resolve(zero, no_env).random_len, 1);

    let huge = FileConfig {
        random_len: Some(10_000),
        ..Default::default()
    };
    assert_eq!(Config::resolve(huge, no_env).random_len, MAX_RANDOM_LEN);
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging section
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_logging_section_partial() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
level = "debug"
file_rotation = "NEVER"
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.file_prefix, "searchlight");
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("Hourly"), LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_is_not_an_error() {
    let path = std::env::temp_dir().join("searchlight-test-does-not-exist.toml");
    let file = Config::load_file_config(Some(&path)).unwrap();
    assert!(file.step_delay_ms.is_none());
    assert!(Config::load_file_config(None).is_ok());
}

#[test]
fn test_malformed_file_is_an_error() {
    let path = std::env::temp_dir().join(format!(
        "searchlight-test-malformed-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "step_delay_ms = \"not a number\"\n[logging\n").unwrap();

    let err = Config::load_file_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_write_default_produces_loadable_file() {
    let dir = std::env::temp_dir().join(format!("searchlight-test-{}", std::process::id()));
    let path = dir.join("config.toml");

    Config::write_default(&path).unwrap();
    let file = Config::load_file_config(Some(&path)).unwrap();
    assert_eq!(file.step_delay_ms, Some(1000));

    let _ = std::fs::remove_dir_all(&dir);
}
