mod layout;
mod picker_popup;
mod status_bar;
mod theme;
mod trigger;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    trigger::render(frame, app_layout.trigger, state);
    trigger::render_error(frame, app_layout.error_line, state);
    picker_popup::render(frame, app_layout.body, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
