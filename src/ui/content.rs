use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Main region: the status line, centred.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.appearance);
    frame.render_widget(Block::default().style(theme.window()), area);

    if area.height == 0 || state.status_line.is_empty() {
        return;
    }
    let line_area = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    let paragraph = Paragraph::new(state.status_line.as_str())
        .style(theme.status_text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, line_area);
}
