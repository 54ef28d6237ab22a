use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const ACCENT_KEY: Color = Color::Yellow;
    pub const TEXT_SECONDARY: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn cell() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn cell_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Small 12-hour annotation next to a 24-hour value.
    pub fn annotation() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn selected_time() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::ACCENT_KEY).add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
