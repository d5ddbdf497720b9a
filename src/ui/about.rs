use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 8;

pub fn about_lines() -> Vec<String> {
    vec![
        env!("CARGO_PKG_NAME").to_string(),
        format!("Version {}", env!("CARGO_PKG_VERSION")),
        env!("CARGO_PKG_DESCRIPTION").to_string(),
        String::new(),
        "Esc to close".to_string(),
    ]
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.appearance);
    let panel = centered(area, PANEL_WIDTH, PANEL_HEIGHT);

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border())
        .style(theme.panel());

    let lines: Vec<Line> = about_lines().into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, panel);
    frame.render_widget(paragraph, panel);
}
