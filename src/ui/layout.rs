use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub trigger: Rect,
    pub error_line: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Content: trigger button | validation message | picker body
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Trigger button
            Constraint::Length(1), // Error line
            Constraint::Min(0),    // Picker
        ])
        .split(content);

    // Keep the button compact on the left
    let trigger_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(content_chunks[0]);

    AppLayout {
        trigger: trigger_row[0],
        error_line: content_chunks[1],
        body: content_chunks[2],
        status_bar,
    }
}

/// Centered popup inside `area`, clamped to the space available.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
