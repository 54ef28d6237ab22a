use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use timepick::picker::{PickerError, SelectionState};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::TimeSelected(time) => {
            tracing::debug!(%time, "selection delivered");
            state.record_selection(time);
            if state.config.ui.exit_on_confirm {
                vec![Action::Quit]
            } else {
                vec![]
            }
        }
        AppEvent::Tick => {
            state.refresh_clock();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.engine.state() {
        SelectionState::Closed => handle_closed_key(state, key),
        SelectionState::ChoosingHour | SelectionState::ChoosingMinute(_) => handle_grid_key(state, key),
        SelectionState::Confirmed(_) => handle_confirmed_key(state, key),
    }
}

fn handle_closed_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => {
            if state.open_picker() {
                vec![]
            } else {
                state.status_message = Some("Picker is disabled".to_string());
                vec![Action::Bell]
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_grid_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.grid_items().len();
    let columns = state.grid_columns();
    match key.code {
        KeyCode::Esc => {
            state.cancel();
            vec![]
        }
        KeyCode::Left => {
            state.cursor.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.cursor.move_right(len);
            vec![]
        }
        KeyCode::Up => {
            state.cursor.move_up(columns);
            vec![]
        }
        KeyCode::Down => {
            state.cursor.move_down(columns, len);
            vec![]
        }
        KeyCode::Home => {
            state.cursor.reset();
            vec![]
        }
        KeyCode::End => {
            state.cursor.move_end(len);
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => report(state, |s| s.pick_at_cursor()),
        KeyCode::Backspace => match state.engine.state() {
            SelectionState::ChoosingMinute(_) => report(state, |s| s.back_to_hours()),
            _ => vec![],
        },
        _ => vec![],
    }
}

fn handle_confirmed_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => report(state, |s| s.confirm()),
        KeyCode::Backspace => report(state, |s| s.back_to_hours()),
        KeyCode::Esc => {
            state.cancel();
            vec![]
        }
        _ => vec![],
    }
}

/// Run a picker operation, surfacing a rejection in the status bar.
fn report(state: &mut AppState, op: impl FnOnce(&mut AppState) -> Result<(), PickerError>) -> Vec<Action> {
    match op(state) {
        Ok(()) => {
            state.status_message = None;
            vec![]
        }
        Err(e) => {
            tracing::warn!(error = %e, "picker rejected operation");
            state.status_message = Some(e.to_string());
            vec![Action::Bell]
        }
    }
}
