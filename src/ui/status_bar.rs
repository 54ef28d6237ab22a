use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use timepick::picker::SelectionState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(format!(" {} ", state.status_line()), Theme::status_bar()));

    let mode = match state.engine.state() {
        SelectionState::Closed => "CLOSED",
        SelectionState::ChoosingHour => "HOUR",
        SelectionState::ChoosingMinute(_) => "MINUTE",
        SelectionState::Confirmed(_) => "CONFIRM",
    };
    let right = format!(" [{}] {} ", mode, state.clock);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(right, Style::default().fg(Theme::ACCENT).bg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
