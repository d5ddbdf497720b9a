//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! sensible default so the application works without a config file.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const MAX_RUN_DELAY_MS: u64 = 60_000;
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("run.delay_ms must be between 1 and {max}, got {0}", max = MAX_RUN_DELAY_MS)]
    InvalidRunDelay(u64),
    #[error("ui.title must not be empty")]
    EmptyTitle,
    #[error("logging.level {0:?} is not a valid level")]
    InvalidLogLevel(String),
    #[error("ui.timestamp_format {0:?} is not a valid strftime format")]
    InvalidTimestampFormat(String),
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.delay_ms == 0 || self.run.delay_ms > MAX_RUN_DELAY_MS {
            return Err(ConfigError::InvalidRunDelay(self.run.delay_ms));
        }
        if self.ui.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if !is_valid_timestamp_format(&self.ui.timestamp_format) {
            return Err(ConfigError::InvalidTimestampFormat(
                self.ui.timestamp_format.clone(),
            ));
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

/// Toolbar labels and status formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// File name shown at the left of the toolbar.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_output_title")]
    pub output_title: String,
    /// `chrono` format string for the last-action time in the status bar.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output_title: default_output_title(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Simulated run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }

    /// Log directory with a leading `~` expanded.
    pub fn resolved_log_dir(&self) -> PathBuf {
        match self.log_dir.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(&self.log_dir)),
            None => PathBuf::from(&self.log_dir),
        }
    }
}

fn default_title() -> String {
    "main.rs".into()
}

fn default_output_title() -> String {
    "Output".into()
}

fn is_valid_timestamp_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.into()
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_log_dir() -> String {
    "~/.local/share/toolbar-shell/logs".into()
}

fn default_level() -> String {
    "info".into()
}
