use crate::app::state::AppearanceMode;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one appearance mode.
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub rule: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::Rgb(250, 250, 250),
        surface: Color::Rgb(232, 232, 236),
        text: Color::Rgb(30, 30, 34),
        muted: Color::Rgb(150, 150, 156),
        accent: Color::Rgb(0, 110, 220),
        rule: Color::Rgb(200, 200, 206),
    };

    pub const DARK: Theme = Theme {
        background: Color::Rgb(30, 30, 32),
        surface: Color::Rgb(48, 48, 52),
        text: Color::Rgb(235, 235, 240),
        muted: Color::Rgb(110, 110, 118),
        accent: Color::Rgb(80, 200, 210),
        rule: Color::Rgb(70, 70, 76),
    };

    pub fn for_mode(mode: AppearanceMode) -> &'static Theme {
        match mode {
            AppearanceMode::Light => &Self::LIGHT,
            AppearanceMode::Dark => &Self::DARK,
        }
    }

    pub fn window(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn toolbar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn title(&self) -> Style {
        self.toolbar().add_modifier(Modifier::BOLD)
    }

    pub fn button(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn button_focused(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .bg(self.surface)
            .add_modifier(Modifier::DIM)
    }

    pub fn spinner(&self) -> Style {
        self.toolbar().fg(self.accent)
    }

    pub fn rule(&self) -> Style {
        Style::default().fg(self.rule).bg(self.surface)
    }

    pub fn status_text(&self) -> Style {
        self.window().add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.muted).bg(self.surface)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent).bg(self.surface)
    }
}
