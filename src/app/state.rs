use crate::config::AppConfig;
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use timepick::picker::{PickerError, PickerOptions, SelectionState, TimeSelectionEngine, TimeSink};

/// Cursor over the grid currently on screen (hours or minutes).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub index: usize,
}

impl GridCursor {
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn move_left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_right(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn move_up(&mut self, columns: usize) {
        if self.index >= columns {
            self.index -= columns;
        }
    }

    pub fn move_down(&mut self, columns: usize, len: usize) {
        if self.index + columns < len {
            self.index += columns;
        }
    }

    pub fn move_end(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub engine: TimeSelectionEngine,
    pub cursor: GridCursor,
    pub selected_times: Vec<String>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub clock: String,
}

impl AppState {
    pub fn new(config: AppConfig, sink: impl TimeSink + 'static) -> Self {
        let engine = TimeSelectionEngine::new(PickerOptions::from(&config.picker), sink);
        let clock = format_clock(&config.ui.clock_format);
        Self {
            config,
            engine,
            cursor: GridCursor::default(),
            selected_times: Vec::new(),
            should_quit: false,
            dirty: true,
            status_message: None,
            clock,
        }
    }

    /// Values shown in the active grid: selectable hours, or the minutes
    /// for the chosen hour. Empty while closed or confirmed.
    pub fn grid_items(&self) -> Vec<u8> {
        match self.engine.state() {
            SelectionState::ChoosingHour => self.engine.selectable_hours().collect(),
            SelectionState::ChoosingMinute(hour) => self.engine.selectable_minutes(hour).collect(),
            SelectionState::Closed | SelectionState::Confirmed(_) => Vec::new(),
        }
    }

    pub fn grid_columns(&self) -> usize {
        let columns = match self.engine.state() {
            SelectionState::ChoosingMinute(_) => self.config.ui.minute_columns,
            _ => self.config.ui.hour_columns,
        };
        columns.max(1)
    }

    pub fn open_picker(&mut self) -> bool {
        self.engine.open();
        self.cursor.reset();
        self.status_message = None;
        self.dirty = true;
        self.engine.is_open()
    }

    /// Choose the value under the cursor in the active grid.
    pub fn pick_at_cursor(&mut self) -> Result<(), PickerError> {
        let Some(&value) = self.grid_items().get(self.cursor.index) else {
            return Ok(());
        };
        let result = match self.engine.state() {
            SelectionState::ChoosingHour => self.engine.choose_hour(value),
            _ => self.engine.choose_minute(value),
        };
        if result.is_ok() {
            self.cursor.reset();
        }
        self.dirty = true;
        result
    }

    pub fn back_to_hours(&mut self) -> Result<(), PickerError> {
        let hour = match self.engine.state() {
            SelectionState::ChoosingMinute(hour) => Some(hour),
            SelectionState::Confirmed(time) => Some(time.hour()),
            _ => None,
        };
        self.engine.clear_hour()?;
        // Land on the hour that was just dropped.
        self.cursor.index = hour
            .and_then(|h| self.grid_items().iter().position(|&x| x == h))
            .unwrap_or(0);
        self.dirty = true;
        Ok(())
    }

    pub fn confirm(&mut self) -> Result<(), PickerError> {
        self.engine.confirm()?;
        self.cursor.reset();
        self.dirty = true;
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.engine.cancel();
        self.cursor.reset();
        self.dirty = true;
    }

    pub fn record_selection(&mut self, time: String) {
        self.status_message = Some(format!("Selected {}", time));
        self.selected_times.push(time);
        self.dirty = true;
    }

    pub fn refresh_clock(&mut self) {
        let clock = format_clock(&self.config.ui.clock_format);
        if clock != self.clock {
            self.clock = clock;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.engine.state() {
            SelectionState::Closed if self.engine.is_disabled() => "Picker disabled".to_string(),
            SelectionState::Closed => match self.selected_times.last() {
                Some(last) => format!("Last selected: {}", last),
                None => "No time selected".to_string(),
            },
            SelectionState::ChoosingHour => "Select hour".to_string(),
            SelectionState::ChoosingMinute(_) => "Select minute".to_string(),
            SelectionState::Confirmed(time) => format!("Selected Time: {}", time),
        }
    }
}

const FALLBACK_CLOCK_FORMAT: &str = "%H:%M:%S";

/// Format the wall clock, falling back to `%H:%M:%S` if `format` is not a
/// valid strftime string.
fn format_clock(format: &str) -> String {
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    let items = if items.iter().any(|item| matches!(item, Item::Error)) {
        StrftimeItems::new(FALLBACK_CLOCK_FORMAT).collect()
    } else {
        items
    };
    Local::now().format_with_items(items.into_iter()).to_string()
}
