use crate::app::state::AppState;
use crate::ui::layout::popup_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use timepick::picker::{to_12_hour, to_12_hour_time, SelectionState};

const HOUR_CELL_WIDTH: usize = 11;
const HOUR_CELL_WIDTH_24H: usize = 4;
const MINUTE_CELL_WIDTH: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let engine = &state.engine;
    if !engine.is_open() {
        return;
    }

    let lines = build_lines(state);
    let content_w = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup = popup_area(area, content_w.max(40) + 4, lines.len() as u16 + 2);

    // Clear background
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Select Time ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}

fn build_lines(state: &AppState) -> Vec<Line<'static>> {
    let engine = &state.engine;
    let mut lines: Vec<Line<'static>> = Vec::new();

    // Selected time so far, e.g. "10:MM" with its 12-hour reading
    if let (Some(hour), minute) = engine.selection() {
        let minute_text = minute.map_or_else(|| "MM".to_string(), |m| format!("{:02}", m));
        lines.push(Line::from(vec![
            Span::styled(format!(" {:02}:{}", hour, minute_text), Theme::selected_time()),
            Span::styled(
                format!("  {}", to_12_hour_time(hour, minute.unwrap_or(0))),
                Theme::annotation(),
            ),
        ]));
        lines.push(Line::default());
    }

    match engine.state() {
        SelectionState::ChoosingHour => {
            lines.push(Line::from(Span::styled(" Select Hour", Theme::title())));
            let cell_width = if engine.config().is_24_hour {
                HOUR_CELL_WIDTH_24H
            } else {
                HOUR_CELL_WIDTH
            };
            let labels = state
                .grid_items()
                .into_iter()
                .map(|hour| {
                    if engine.config().is_24_hour {
                        engine.hour_label(hour)
                    } else {
                        format!("{:02} {}", hour, to_12_hour(hour))
                    }
                })
                .collect::<Vec<_>>();
            push_grid(&mut lines, &labels, state.grid_columns(), cell_width, state.cursor.index);
        }
        SelectionState::ChoosingMinute(_) => {
            lines.push(Line::from(Span::styled(" Select Minute", Theme::title())));
            let labels = state
                .grid_items()
                .into_iter()
                .map(|minute| format!("{:02}", minute))
                .collect::<Vec<_>>();
            push_grid(&mut lines, &labels, state.grid_columns(), MINUTE_CELL_WIDTH, state.cursor.index);
        }
        SelectionState::Confirmed(time) => {
            lines.push(Line::from(vec![
                Span::styled(" Selected Time: ", Theme::title()),
                Span::styled(time.to_string(), Theme::selected_time()),
                Span::styled(format!("  ({})", engine.time_label(time)), Theme::annotation()),
            ]));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(" [ Done ] ", Theme::cell_selected())));
        }
        SelectionState::Closed => {}
    }

    lines.push(Line::default());
    lines.push(help_line(engine.state()));
    lines
}

fn push_grid(
    lines: &mut Vec<Line<'static>>,
    labels: &[String],
    columns: usize,
    cell_width: usize,
    cursor: usize,
) {
    if labels.is_empty() {
        lines.push(Line::from(Span::styled(" Nothing selectable", Theme::error_message())));
        return;
    }
    for (row, chunk) in labels.chunks(columns).enumerate() {
        let mut spans = vec![Span::raw(" ")];
        for (col, label) in chunk.iter().enumerate() {
            let style = if row * columns + col == cursor {
                Theme::cell_selected()
            } else {
                Theme::cell()
            };
            spans.push(Span::styled(format!("{:^width$}", label, width = cell_width), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
}

fn help_line(selection: SelectionState) -> Line<'static> {
    let bindings: &[(&str, &str)] = match selection {
        SelectionState::ChoosingHour => &[("←↑↓→", " Move  "), ("Enter", " Pick  "), ("Esc", " Close")],
        SelectionState::ChoosingMinute(_) => &[
            ("←↑↓→", " Move  "),
            ("Enter", " Pick  "),
            ("Bksp", " Change hour  "),
            ("Esc", " Close"),
        ],
        SelectionState::Confirmed(_) => &[("Enter", " Done  "), ("Bksp", " Change hour  "), ("Esc", " Close")],
        SelectionState::Closed => &[],
    };
    let mut spans = vec![Span::raw(" ")];
    for (key, text) in bindings {
        spans.push(Span::styled(*key, Theme::key_hint()));
        spans.push(Span::styled(*text, Theme::hint_text()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hour_grid_rows() {
        let mut cfg = AppConfig::default();
        cfg.picker.start_time = Some("09:00".into());
        cfg.picker.end_time = Some("17:00".into());
        let mut state = AppState::new(cfg, |_: &str| {});
        state.open_picker();

        let lines = build_lines(&state);
        let rendered: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(rendered[0], " Select Hour");
        // 9 hours in 4 columns: 3 rows
        assert!(rendered[1].contains("09 9 AM"));
        assert!(rendered[3].contains("17 5 PM"));
        assert!(!rendered.iter().any(|l| l.contains("18 6 PM")));
    }

    #[test]
    fn test_minute_grid_shows_partial_selection() {
        let mut cfg = AppConfig::default();
        cfg.picker.start_time = Some("09:45".into());
        let mut state = AppState::new(cfg, |_: &str| {});
        state.open_picker();
        state.pick_at_cursor().unwrap();

        let rendered: Vec<String> = build_lines(&state).iter().map(text).collect();
        assert_eq!(rendered[0], " 09:MM  9:00 AM");
        assert_eq!(rendered[2], " Select Minute");
        assert!(rendered[3].starts_with("  45 "));
        assert!(rendered[4].contains("55"));
    }

    #[test]
    fn test_confirmed_view() {
        let mut state = AppState::new(AppConfig::default(), |_: &str| {});
        state.open_picker();
        state.engine.choose_hour(13).unwrap();
        state.engine.choose_minute(5).unwrap();

        let rendered: Vec<String> = build_lines(&state).iter().map(text).collect();
        assert_eq!(rendered[0], " 13:05  1:05 PM");
        assert_eq!(rendered[2], " Selected Time: 13:05  (1:05 PM)");
    }

    #[test]
    fn test_empty_grid_is_flagged() {
        let mut cfg = AppConfig::default();
        cfg.picker.start_time = Some("17:00".into());
        cfg.picker.end_time = Some("09:00".into());
        let mut state = AppState::new(cfg, |_: &str| {});
        state.open_picker();

        let rendered: Vec<String> = build_lines(&state).iter().map(text).collect();
        assert_eq!(rendered[1], " Nothing selectable");
    }
}
