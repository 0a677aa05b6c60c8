//! Configuration for the visualizer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/searchlight/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_STEP_DELAY_MS: u64 = crate::player::DEFAULT_STEP_DELAY.as_millis() as u64;
const DEFAULT_RANDOM_LEN: usize = crate::random::DEFAULT_RANDOM_LEN;
const DEFAULT_THEME: &str = crate::theme::DEFAULT_THEME;

/// Longest random array the generator will produce
pub const MAX_RANDOM_LEN: usize = 32;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Pause after each Checking/Found step, shared by both algorithms
    pub step_delay_ms: u64,

    /// Number of elements produced by "generate random array"
    pub random_len: usize,

    /// Theme name: "Spy Dark", "Spy Light", "Terminal"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            random_len: DEFAULT_RANDOM_LEN,
            theme: DEFAULT_THEME.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every field optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub step_delay_ms: Option<u64>,
    pub random_len: Option<usize>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/searchlight/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("searchlight").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Overwrite the config file with the default template
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Could not write {}", path.display()))
    }

    /// Load the config file if it exists.
    ///
    /// A file that exists but cannot be read or parsed is an error: a broken
    /// config should fail loudly rather than silently fall back to defaults.
    fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
        let Some(path) = path else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config(Self::config_path().as_deref())?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Step delay: env > file > default
        let step_delay_ms = env("SEARCHLIGHT_STEP_DELAY_MS")
            .and_then(|v| v.trim().parse().ok())
            .or(file.step_delay_ms)
            .unwrap_or(defaults.step_delay_ms);

        // Random length: file > default, clamped to something that fits on screen
        let random_len = file
            .random_len
            .unwrap_or(defaults.random_len)
            .clamp(1, MAX_RANDOM_LEN);

        // Theme: env > file > default
        let theme = env("SEARCHLIGHT_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            step_delay_ms,
            random_len,
            theme,
            logging,
        }
    }
}
