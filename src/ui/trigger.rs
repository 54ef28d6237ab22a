use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// The button that opens the picker.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let engine = &state.engine;
    let (border, text) = if engine.is_disabled() {
        (Theme::border(), Theme::button_disabled())
    } else if engine.is_open() {
        (Theme::border_focused(), Theme::button())
    } else {
        (Theme::border(), Theme::button())
    };

    let mut spans = vec![Span::styled(engine.button_text().to_string(), text)];
    // Show a seeded default until the picker is first opened.
    if let Some(seed) = engine.seeded_time().filter(|_| !engine.is_open()) {
        spans.push(Span::styled(format!("  {}", seed), Theme::annotation()));
    }

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Bounds validation message, if any. The picker stays usable either way.
pub fn render_error(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(message) = state.engine.error_message() {
        let line = Line::from(Span::styled(format!(" {}", message), Theme::error_message()));
        frame.render_widget(Paragraph::new(line), area);
    }
}
