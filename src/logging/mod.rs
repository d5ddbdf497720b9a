//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are appended to `toolbar-shell.log` in the
//! configured log directory (default: `~/.local/share/toolbar-shell/logs/`).
//! Nothing is written to the terminal since it belongs to the UI.

use crate::app::state::StateChange;
use crate::config::LoggingConfig;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE_NAME: &str = "toolbar-shell.log";

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled or the file cannot be opened.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }
    let log_dir = config.resolved_log_dir();
    let (path, file) = open_log_file(&log_dir)?;

    let default_level = config
        .level_filter()
        .map(|level| level.to_string())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .is_ok();

    installed.then_some(path)
}

fn open_log_file(log_dir: &Path) -> Option<(PathBuf, File)> {
    fs::create_dir_all(log_dir).ok()?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}

/// Emit one event per published state change.
pub fn record_changes(changes: &[StateChange]) {
    for change in changes {
        match change {
            StateChange::Appearance(mode) => {
                tracing::info!(mode = mode.name(), "appearance changed")
            }
            StateChange::Status(text) => tracing::info!(status = %text, "status line updated"),
            StateChange::Busy(busy) => tracing::info!(busy, "busy state changed"),
            StateChange::AboutPanel(visible) => tracing::debug!(visible, "about panel"),
            StateChange::Focus(control) => tracing::trace!(?control, "focus moved"),
        }
    }
}
