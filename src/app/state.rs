use crate::app::event::RunId;
use crate::config::model::DEFAULT_TIMESTAMP_FORMAT;
use crate::config::AppConfig;
use chrono::Local;
use ratatui::layout::Rect;
use std::fmt::Write;
use std::time::Duration;

pub const STATUS_INITIAL: &str = "No action yet";
pub const STATUS_DARK_MODE: &str = "Dark mode enabled";
pub const STATUS_LIGHT_MODE: &str = "Light mode enabled";
pub const STATUS_SHARE: &str = "Share clicked";
pub const STATUS_RUNNING: &str = "Code running";
pub const STATUS_EXECUTED: &str = "Executed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
}

impl AppearanceMode {
    pub fn is_dark(self) -> bool {
        self == AppearanceMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            AppearanceMode::Light => AppearanceMode::Dark,
            AppearanceMode::Dark => AppearanceMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyState {
    Idle,
    Busy { run_id: RunId },
}

/// Current local time in `format`, or in the default format if `format`
/// does not render.
fn format_timestamp(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

/// Interactive controls of the toolbar, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ModeToggle,
    Share,
    Run,
    Clear,
    About,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::ModeToggle,
        Control::Share,
        Control::Run,
        Control::Clear,
        Control::About,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// One-line hint shown for the focused control.
    pub fn help(self) -> &'static str {
        match self {
            Control::ModeToggle => "Toggle Dark Mode",
            Control::Share => "Share",
            Control::Run => "Run",
            Control::Clear => "Clear output",
            Control::About => "Info",
        }
    }
}

/// Published by every mutation of [`AppState`].
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    Appearance(AppearanceMode),
    Status(String),
    Busy(bool),
    AboutPanel(bool),
    Focus(Control),
}

/// Single state container for the window.
///
/// All mutations go through the methods below so that each one publishes a
/// [`StateChange`] and marks the state dirty for the render loop.
pub struct AppState {
    pub config: AppConfig,
    pub appearance: AppearanceMode,
    pub status_line: String,
    pub busy: BusyState,
    pub focus: Control,
    pub about_visible: bool,
    pub last_action_at: Option<String>,
    pub next_run_id: RunId,
    pub viewport: Rect,
    pub tick_count: u64,
    pub changes: Vec<StateChange>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            appearance: AppearanceMode::default(),
            status_line: STATUS_INITIAL.to_string(),
            busy: BusyState::Idle,
            focus: Control::Run,
            about_visible: false,
            last_action_at: None,
            next_run_id: 0,
            viewport: Rect::default(),
            tick_count: 0,
            changes: Vec::new(),
            should_quit: false,
            dirty: true,
        }
    }

    fn publish(&mut self, change: StateChange) {
        self.changes.push(change);
        self.dirty = true;
    }

    fn set_status(&mut self, text: &str) {
        self.status_line = text.to_string();
        self.last_action_at = Some(format_timestamp(&self.config.ui.timestamp_format));
        self.publish(StateChange::Status(self.status_line.clone()));
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.busy, BusyState::Busy { .. })
    }

    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.config.run.delay_ms)
    }

    /// Run and About are unavailable while a run is in flight.
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Run | Control::About => !self.is_busy(),
            Control::ModeToggle | Control::Share | Control::Clear => true,
        }
    }

    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggled();
        self.publish(StateChange::Appearance(self.appearance));
        let text = if self.appearance.is_dark() {
            STATUS_DARK_MODE
        } else {
            STATUS_LIGHT_MODE
        };
        self.set_status(text);
    }

    pub fn share(&mut self) {
        self.set_status(STATUS_SHARE);
    }

    pub fn clear(&mut self) {
        self.set_status("");
    }

    /// Start a run. Returns `None` (and changes nothing) if one is in flight.
    pub fn invoke_run(&mut self) -> Option<RunId> {
        if let BusyState::Busy { run_id } = self.busy {
            tracing::debug!(run_id, "run ignored, already busy");
            return None;
        }
        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.busy = BusyState::Busy { run_id };
        self.publish(StateChange::Busy(true));
        self.set_status(STATUS_RUNNING);
        Some(run_id)
    }

    /// Finish the run identified by `run_id`. Stale ids are ignored.
    pub fn complete_run(&mut self, run_id: RunId) -> bool {
        if self.busy != (BusyState::Busy { run_id }) {
            tracing::debug!(run_id, "stale run completion ignored");
            return false;
        }
        self.busy = BusyState::Idle;
        self.publish(StateChange::Busy(false));
        self.set_status(STATUS_EXECUTED);
        true
    }

    pub fn open_about(&mut self) {
        if !self.is_enabled(Control::About) || self.about_visible {
            return;
        }
        self.about_visible = true;
        self.publish(StateChange::AboutPanel(true));
    }

    pub fn close_about(&mut self) {
        if self.about_visible {
            self.about_visible = false;
            self.publish(StateChange::AboutPanel(false));
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.publish(StateChange::Focus(self.focus));
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.publish(StateChange::Focus(self.focus));
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.dirty = true;
    }

    pub fn spinner_frame(&self) -> usize {
        // Two ticks per frame at 50ms keeps the spinner at ~10 fps
        (self.tick_count / 2) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.appearance, AppearanceMode::Light);
        assert_eq!(s.busy, BusyState::Idle);
        assert_eq!(s.status_line, STATUS_INITIAL);
        assert!(!s.about_visible);
        assert!(s.last_action_at.is_none());
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..7 {
            let mut s = state();
            for _ in 0..n {
                s.toggle_appearance();
            }
            assert_eq!(s.appearance.is_dark(), n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn test_toggle_status_messages() {
        let mut s = state();
        s.toggle_appearance();
        assert_eq!(s.appearance, AppearanceMode::Dark);
        assert_eq!(s.status_line, "Dark mode enabled");
        s.toggle_appearance();
        assert_eq!(s.appearance, AppearanceMode::Light);
        assert_eq!(s.status_line, "Light mode enabled");
    }

    #[test]
    fn test_run_lifecycle() {
        let mut s = state();
        let run_id = s.invoke_run().expect("idle run should start");
        assert!(s.is_busy());
        assert_eq!(s.status_line, "Code running");

        // Re-entrant invocation is ignored
        let before = s.next_run_id;
        assert_eq!(s.invoke_run(), None);
        assert_eq!(s.busy, BusyState::Busy { run_id });
        assert_eq!(s.status_line, "Code running");
        assert_eq!(s.next_run_id, before);

        assert!(s.complete_run(run_id));
        assert_eq!(s.busy, BusyState::Idle);
        assert_eq!(s.status_line, "Executed");

        // A second completion for the same run does nothing
        s.share();
        assert!(!s.complete_run(run_id));
        assert_eq!(s.status_line, "Share clicked");
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut s = state();
        let first = s.invoke_run().unwrap();
        assert!(s.complete_run(first));
        let second = s.invoke_run().unwrap();
        assert_ne!(first, second);
        assert!(!s.complete_run(first));
        assert!(s.is_busy());
        assert!(!s.complete_run(second + 10));
        assert!(s.complete_run(second));
    }

    #[test]
    fn test_busy_gates_run_and_about() {
        let mut s = state();
        for c in Control::ALL {
            assert!(s.is_enabled(c));
        }
        let run_id = s.invoke_run().unwrap();
        assert!(!s.is_enabled(Control::Run));
        assert!(!s.is_enabled(Control::About));
        assert!(s.is_enabled(Control::ModeToggle));
        assert!(s.is_enabled(Control::Share));
        assert!(s.is_enabled(Control::Clear));

        s.open_about();
        assert!(!s.about_visible);

        s.complete_run(run_id);
        s.open_about();
        assert!(s.about_visible);
        s.close_about();
        assert!(!s.about_visible);
    }

    #[test]
    fn test_clear_always_empties() {
        let mut s = state();
        s.clear();
        assert_eq!(s.status_line, "");

        s.toggle_appearance();
        let run_id = s.invoke_run().unwrap();
        s.clear();
        assert_eq!(s.status_line, "");
        assert!(s.is_busy());
        assert!(s.complete_run(run_id));
        assert_eq!(s.status_line, "Executed");
    }

    #[test]
    fn test_share_touches_only_status() {
        let mut s = state();
        s.toggle_appearance();
        let run_id = s.invoke_run().unwrap();
        s.share();
        assert_eq!(s.status_line, "Share clicked");
        assert_eq!(s.busy, BusyState::Busy { run_id });
        assert_eq!(s.appearance, AppearanceMode::Dark);
    }

    #[test]
    fn test_mutations_publish_changes() {
        let mut s = state();
        s.dirty = false;
        s.toggle_appearance();
        assert!(s.dirty);
        let changes: Vec<_> = s.changes.drain(..).collect();
        assert_eq!(
            changes,
            vec![
                StateChange::Appearance(AppearanceMode::Dark),
                StateChange::Status("Dark mode enabled".into()),
            ]
        );

        s.invoke_run();
        assert_eq!(
            s.changes.drain(..).collect::<Vec<_>>(),
            vec![
                StateChange::Busy(true),
                StateChange::Status("Code running".into()),
            ]
        );

        // Ignored invocation publishes nothing
        s.dirty = false;
        s.invoke_run();
        assert!(s.changes.is_empty());
        assert!(!s.dirty);
    }

    #[test]
    fn test_bad_timestamp_format_falls_back() {
        let mut cfg = AppConfig::default();
        cfg.ui.timestamp_format = "%Q".into();
        let mut s = AppState::new(cfg);
        s.share();
        assert_eq!(s.status_line, STATUS_SHARE);
        let at = s.last_action_at.expect("timestamp recorded");
        assert_eq!(at.len(), "00:00:00".len());
        assert!(!at.contains("%Q"));
    }

    #[test]
    fn test_focus_cycles() {
        let mut s = state();
        assert_eq!(s.focus, Control::Run);
        s.focus_next();
        assert_eq!(s.focus, Control::Clear);
        s.focus_next();
        s.focus_next();
        assert_eq!(s.focus, Control::ModeToggle);
        s.focus_prev();
        assert_eq!(s.focus, Control::About);
    }
}
