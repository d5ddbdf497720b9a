use crate::app::state::*;
use crate::ui::layout::{self, SPINNER_WIDTH};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(frame_index: usize) -> &'static str {
    SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()]
}

pub fn render(frame: &mut Frame, area: Rect, rule: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.appearance);
    frame.render_widget(Block::default().style(theme.toolbar()), area);

    let (left, divider_x, right) = layout::toolbar_halves(area);

    // File title beside the window edge, output label after the divider
    render_label(frame, left, &state.config.ui.title, theme);
    render_label(frame, right, &state.config.ui.output_title, theme);

    if area.width > 0 {
        let divider = Rect::new(divider_x, area.y, 1, area.height);
        frame.render_widget(Paragraph::new("│").style(theme.rule()), divider);
    }

    for slot in layout::control_slots(area, state) {
        let style = if !state.is_enabled(slot.control) {
            theme.button_disabled()
        } else if state.focus == slot.control {
            theme.button_focused()
        } else {
            theme.button()
        };
        let label = layout::control_label(slot.control, state);
        frame.render_widget(Paragraph::new(label).style(style), slot.area);

        if slot.control == Control::Run && state.is_busy() {
            let spinner_x = slot.area.right() + 1;
            if spinner_x + SPINNER_WIDTH <= area.right() {
                let spinner_area = Rect::new(spinner_x, area.y, SPINNER_WIDTH, 1);
                frame.render_widget(
                    Paragraph::new(spinner_glyph(state.spinner_frame())).style(theme.spinner()),
                    spinner_area,
                );
            }
        }
    }

    let rule_line = "─".repeat(rule.width as usize);
    frame.render_widget(Paragraph::new(rule_line).style(theme.rule()), rule);
}

fn render_label(frame: &mut Frame, half: Rect, text: &str, theme: &Theme) {
    if half.width < 2 {
        return;
    }
    let area = Rect::new(half.x + 1, half.y, half.width - 1, 1);
    frame.render_widget(Paragraph::new(text).style(theme.title()), area);
}
