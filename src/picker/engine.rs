//! The hour-then-minute selection state machine.
//!
//! ```text
//! Closed --open--> ChoosingHour --choose_hour--> ChoosingMinute(h)
//!                       ^                              |
//!                       +---------clear_hour-----------+
//!                       |                              | choose_minute
//!                       +---clear_hour--- Confirmed(h:m) <-+
//!                                              |
//!                           Closed <--confirm--+   (emits "HH:MM")
//! ```
//!
//! `cancel` returns to `Closed` from anywhere without emitting. A disabled
//! engine never leaves `Closed`.

use super::bounds::{TimeBounds, ValidationResult};
use super::sink::{ParseReporter, TimeSink, TracingReporter};
use super::time::{parse_time, to_12_hour, TimeOfDay};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Raw widget configuration, as supplied by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub default_time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Label for the trigger button. Not interpreted by the engine.
    pub button_text: String,
    /// Selects 24-hour labels for display. The emitted result is always `HH:MM`.
    pub is_24_hour: bool,
    pub disabled: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            default_time: None,
            start_time: None,
            end_time: None,
            button_text: "Select Time".to_string(),
            is_24_hour: false,
            disabled: false,
        }
    }
}

/// Parsed form of [`PickerOptions`]. Unparseable times are treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_time: Option<TimeOfDay>,
    pub bounds: TimeBounds,
    pub disabled: bool,
    pub is_24_hour: bool,
}

impl EngineConfig {
    pub fn from_options(options: &PickerOptions, reporter: &mut dyn ParseReporter) -> Self {
        let default_time = parse_or_report("default_time", options.default_time.as_deref(), reporter);
        let lower = parse_or_report("start_time", options.start_time.as_deref(), reporter);
        let upper = parse_or_report("end_time", options.end_time.as_deref(), reporter);
        Self {
            default_time,
            bounds: TimeBounds::new(lower, upper),
            disabled: options.disabled,
            is_24_hour: options.is_24_hour,
        }
    }
}

fn parse_or_report(
    field: &'static str,
    text: Option<&str>,
    reporter: &mut dyn ParseReporter,
) -> Option<TimeOfDay> {
    match parse_time(text) {
        Ok(time) => time,
        Err(e) => {
            reporter.parse_failed(field, &e);
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Closed,
    ChoosingHour,
    ChoosingMinute(u8),
    Confirmed(TimeOfDay),
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionState::Closed => f.write_str("closed"),
            SelectionState::ChoosingHour => f.write_str("choosing an hour"),
            SelectionState::ChoosingMinute(hour) => write!(f, "choosing a minute for hour {:02}", hour),
            SelectionState::Confirmed(time) => write!(f, "holding {} for confirmation", time),
        }
    }
}

/// Caller errors: an operation that the current state or bounds do not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("hour {hour:02} is not selectable")]
    HourUnavailable { hour: u8 },
    #[error("minute {minute:02} is not selectable for hour {hour:02}")]
    MinuteUnavailable { hour: u8, minute: u8 },
    #[error("cannot {operation} while {state}")]
    InvalidTransition {
        operation: &'static str,
        state: SelectionState,
    },
}

/// Holds one picker's configuration and selection state.
///
/// The default time seeds the selection when the engine is built and again
/// only when [`reconfigure`](Self::reconfigure) supplies a *different* default.
/// Reopening the picker does not restore it: `open` clears the selection, so a
/// seed is visible only until the first open. This mirrors the widget this
/// engine replaces and is surprising enough to call out.
pub struct TimeSelectionEngine {
    options: PickerOptions,
    config: EngineConfig,
    state: SelectionState,
    seeded: Option<TimeOfDay>,
    validation: ValidationResult,
    sink: Box<dyn TimeSink>,
    reporter: Box<dyn ParseReporter>,
}

impl TimeSelectionEngine {
    /// Build an engine that reports parse failures through `tracing`.
    pub fn new(options: PickerOptions, sink: impl TimeSink + 'static) -> Self {
        Self::with_reporter(options, sink, TracingReporter)
    }

    pub fn with_reporter(
        options: PickerOptions,
        sink: impl TimeSink + 'static,
        reporter: impl ParseReporter + 'static,
    ) -> Self {
        let mut reporter: Box<dyn ParseReporter> = Box::new(reporter);
        let config = EngineConfig::from_options(&options, reporter.as_mut());
        let validation = config.bounds.validate();
        if let Err(ref e) = validation {
            tracing::debug!(lower = %e.lower, upper = %e.upper, "picker bounds are inconsistent");
        }
        Self {
            options,
            config,
            state: SelectionState::Closed,
            seeded: config.default_time,
            validation,
            sink: Box::new(sink),
            reporter,
        }
    }

    /// Apply new options. Bounds are revalidated before this returns.
    pub fn reconfigure(&mut self, options: PickerOptions) {
        let config = EngineConfig::from_options(&options, self.reporter.as_mut());

        if config.default_time != self.config.default_time {
            if let Some(default) = config.default_time {
                tracing::debug!(%default, "reseeding picker from new default");
                self.seeded = Some(default);
            }
        }

        if config.bounds != self.config.bounds {
            self.validation = config.bounds.validate();
            if let Err(ref e) = self.validation {
                tracing::debug!(lower = %e.lower, upper = %e.upper, "picker bounds are inconsistent");
            }

            let still_selectable = match self.state {
                SelectionState::ChoosingMinute(hour) => config.bounds.contains_hour(hour),
                SelectionState::Confirmed(time) => config.bounds.contains(time),
                SelectionState::Closed | SelectionState::ChoosingHour => true,
            };
            if !still_selectable {
                tracing::debug!(state = %self.state, "selection fell outside new bounds");
                self.state = SelectionState::ChoosingHour;
            }
        }

        if config.disabled && self.state != SelectionState::Closed {
            tracing::debug!(state = %self.state, "picker disabled while open, closing");
            self.state = SelectionState::Closed;
        }

        self.config = config;
        self.options = options;
    }

    /// Show the hour grid, discarding any previous selection. No-op when disabled.
    pub fn open(&mut self) {
        if self.config.disabled {
            tracing::debug!("ignoring open on disabled picker");
            return;
        }
        self.seeded = None;
        self.state = SelectionState::ChoosingHour;
    }

    pub fn choose_hour(&mut self, hour: u8) -> Result<(), PickerError> {
        match self.state {
            SelectionState::ChoosingHour => {
                if !self.config.bounds.contains_hour(hour) {
                    return Err(PickerError::HourUnavailable { hour });
                }
                self.state = SelectionState::ChoosingMinute(hour);
                Ok(())
            }
            state => Err(PickerError::InvalidTransition {
                operation: "choose an hour",
                state,
            }),
        }
    }

    pub fn choose_minute(&mut self, minute: u8) -> Result<(), PickerError> {
        match self.state {
            SelectionState::ChoosingMinute(hour) => {
                let time = TimeOfDay::new(hour, minute)
                    .filter(|_| self.config.bounds.selectable_minutes(hour).contains(&minute))
                    .ok_or(PickerError::MinuteUnavailable { hour, minute })?;
                self.state = SelectionState::Confirmed(time);
                Ok(())
            }
            state => Err(PickerError::InvalidTransition {
                operation: "choose a minute",
                state,
            }),
        }
    }

    /// Go back to the hour grid, dropping the chosen hour and any minute.
    pub fn clear_hour(&mut self) -> Result<(), PickerError> {
        match self.state {
            SelectionState::ChoosingMinute(_) | SelectionState::Confirmed(_) => {
                self.state = SelectionState::ChoosingHour;
                Ok(())
            }
            state => Err(PickerError::InvalidTransition {
                operation: "clear the hour",
                state,
            }),
        }
    }

    /// Emit the confirmed time to the sink and close.
    pub fn confirm(&mut self) -> Result<TimeOfDay, PickerError> {
        match self.state {
            SelectionState::Confirmed(time) => {
                self.state = SelectionState::Closed;
                let text = time.to_string();
                tracing::info!(time = %text, "time selected");
                self.sink.time_selected(&text);
                Ok(time)
            }
            state => Err(PickerError::InvalidTransition {
                operation: "confirm",
                state,
            }),
        }
    }

    /// Close without emitting.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Closed;
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != SelectionState::Closed
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn bounds(&self) -> TimeBounds {
        self.config.bounds
    }

    pub fn button_text(&self) -> &str {
        &self.options.button_text
    }

    /// The default time, until the first `open` consumes it.
    pub fn seeded_time(&self) -> Option<TimeOfDay> {
        self.seeded
    }

    pub fn validation(&self) -> ValidationResult {
        self.validation
    }

    pub fn error_message(&self) -> Option<String> {
        self.validation.err().map(|e| e.to_string())
    }

    pub fn selectable_hours(&self) -> RangeInclusive<u8> {
        self.config.bounds.selectable_hours()
    }

    /// `hour` must be one of [`selectable_hours`](Self::selectable_hours).
    pub fn selectable_minutes(&self, hour: u8) -> RangeInclusive<u8> {
        self.config.bounds.selectable_minutes(hour)
    }

    /// Hour and minute chosen so far, for display.
    pub fn selection(&self) -> (Option<u8>, Option<u8>) {
        match self.state {
            SelectionState::Closed => match self.seeded {
                Some(time) => (Some(time.hour()), Some(time.minute())),
                None => (None, None),
            },
            SelectionState::ChoosingHour => (None, None),
            SelectionState::ChoosingMinute(hour) => (Some(hour), None),
            SelectionState::Confirmed(time) => (Some(time.hour()), Some(time.minute())),
        }
    }

    /// Grid label for an hour: `09` in 24-hour mode, `9 AM` otherwise.
    pub fn hour_label(&self, hour: u8) -> String {
        if self.config.is_24_hour {
            format!("{:02}", hour)
        } else {
            to_12_hour(hour)
        }
    }

    pub fn time_label(&self, time: TimeOfDay) -> String {
        if self.config.is_24_hour {
            time.to_string()
        } else {
            time.to_12_hour()
        }
    }
}
