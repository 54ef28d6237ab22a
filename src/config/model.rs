//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the picker works out of the box.

use serde::{Deserialize, Serialize};
use timepick::picker::PickerOptions;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Picker bounds and defaults. Times are `HH:MM` strings; bad values are
/// logged and ignored rather than rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default = "default_button_text")]
    pub button_text: String,
    #[serde(default)]
    pub is_24_hour: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_time: None,
            start_time: None,
            end_time: None,
            button_text: default_button_text(),
            is_24_hour: false,
            disabled: false,
        }
    }
}

impl From<&PickerConfig> for PickerOptions {
    fn from(cfg: &PickerConfig) -> Self {
        PickerOptions {
            default_time: cfg.default_time.clone(),
            start_time: cfg.start_time.clone(),
            end_time: cfg.end_time.clone(),
            button_text: cfg.button_text.clone(),
            is_24_hour: cfg.is_24_hour,
            disabled: cfg.disabled,
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// `chrono` format string for the status bar clock.
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    /// Quit after the first confirmed time instead of returning to the button.
    #[serde(default = "default_true")]
    pub exit_on_confirm: bool,
    #[serde(default = "default_hour_columns")]
    pub hour_columns: usize,
    #[serde(default = "default_minute_columns")]
    pub minute_columns: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clock_format: default_clock_format(),
            exit_on_confirm: true,
            hour_columns: default_hour_columns(),
            minute_columns: default_minute_columns(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_button_text() -> String {
    PickerOptions::default().button_text
}
fn default_clock_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_hour_columns() -> usize {
    4
}
fn default_minute_columns() -> usize {
    10
}
fn default_log_file() -> String {
    "~/.local/share/timepick/timepick.log".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
