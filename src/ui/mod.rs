mod about;
mod content;
pub mod layout;
mod status_bar;
mod theme;
mod toolbar;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    toolbar::render(frame, app_layout.toolbar, app_layout.toolbar_rule, state);
    content::render(frame, app_layout.content, state);
    status_bar::render(frame, app_layout.status_bar, state);

    if state.about_visible {
        about::render(frame, area, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_toolbar_and_status() {
        let mut state = AppState::new(AppConfig::default());
        let screen = draw(&state);
        assert!(screen.contains("main.rs"));
        assert!(screen.contains("Output"));
        assert!(screen.contains("Run"));
        assert!(screen.contains("No action yet"));

        state.invoke_run();
        let screen = draw(&state);
        assert!(screen.contains("Code running"));
        assert!(screen.contains("busy"));
    }

    #[test]
    fn test_renders_about_panel() {
        let mut state = AppState::new(AppConfig::default());
        state.open_about();
        let screen = draw(&state);
        assert!(screen.contains("About"));
        assert!(screen.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cleared_status_leaves_content_blank() {
        let mut state = AppState::new(AppConfig::default());
        state.clear();
        let screen = draw(&state);
        assert!(!screen.contains("No action yet"));
    }
}
