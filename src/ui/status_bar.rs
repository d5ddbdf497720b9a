use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = " d mode  s share  r run  c clear  i info  q quit ";

/// Help text for the focused control, marked when it is unavailable.
pub fn focus_hint(state: &AppState) -> String {
    let help = state.focus.help();
    if state.is_enabled(state.focus) {
        help.to_string()
    } else {
        format!("{} (unavailable)", help)
    }
}

pub fn summary(state: &AppState) -> String {
    let busy = if state.is_busy() { "busy" } else { "idle" };
    let mut s = format!(" {} | {} | {}", state.appearance.name(), busy, focus_hint(state));
    if let Some(ref at) = state.last_action_at {
        s.push_str(&format!(" | last action {}", at));
    }
    s.push(' ');
    s
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.appearance);
    let left = summary(state);

    let mut parts = vec![Span::styled(left.clone(), theme.status_bar())];

    // Pad to push the key hints to the right edge
    let used = left.width() + KEY_HINTS.width();
    if used <= area.width as usize {
        let remaining = area.width as usize - used;
        parts.push(Span::styled(" ".repeat(remaining), theme.status_bar()));
        parts.push(Span::styled(KEY_HINTS, theme.status_bar()));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)).style(theme.status_bar()), area);
}
