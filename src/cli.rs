use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// Pick a time of day in the terminal and print it as HH:MM.
#[derive(Debug, Parser)]
#[command(name = "timepick")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Time preselected before the picker is first opened (HH:MM)
    #[arg(short, long, value_name = "HH:MM")]
    pub default: Option<String>,

    /// Earliest selectable time, inclusive (HH:MM)
    #[arg(short, long, value_name = "HH:MM")]
    pub start: Option<String>,

    /// Latest selectable time, inclusive (HH:MM)
    #[arg(short, long, value_name = "HH:MM")]
    pub end: Option<String>,

    /// Label shown on the trigger button
    #[arg(long)]
    pub button_text: Option<String>,

    /// Show 24-hour labels instead of AM/PM
    #[arg(long = "24h")]
    pub twenty_four_hour: bool,

    /// Render the button but refuse to open the picker
    #[arg(long)]
    pub disabled: bool,

    /// Keep running after a time is confirmed
    #[arg(short, long)]
    pub keep_open: bool,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Overlay command-line values on top of the loaded config.
    pub fn apply(&self, cfg: &mut AppConfig) {
        if let Some(ref default) = self.default {
            cfg.picker.default_time = Some(default.clone());
        }
        if let Some(ref start) = self.start {
            cfg.picker.start_time = Some(start.clone());
        }
        if let Some(ref end) = self.end {
            cfg.picker.end_time = Some(end.clone());
        }
        if let Some(ref text) = self.button_text {
            cfg.picker.button_text = text.clone();
        }
        if self.twenty_four_hour {
            cfg.picker.is_24_hour = true;
        }
        if self.disabled {
            cfg.picker.disabled = true;
        }
        if self.keep_open {
            cfg.ui.exit_on_confirm = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "timepick", "--start", "09:00", "-e", "17:00", "--24h", "--keep-open",
        ]);
        let mut cfg = AppConfig::default();
        cfg.picker.start_time = Some("06:00".into());
        cfg.picker.default_time = Some("10:00".into());
        cli.apply(&mut cfg);

        assert_eq!(cfg.picker.start_time.as_deref(), Some("09:00"));
        assert_eq!(cfg.picker.end_time.as_deref(), Some("17:00"));
        assert_eq!(cfg.picker.default_time.as_deref(), Some("10:00"));
        assert!(cfg.picker.is_24_hour);
        assert!(!cfg.ui.exit_on_confirm);
        assert!(!cfg.picker.disabled);
    }

    #[test]
    fn test_no_flags_leave_config_alone() {
        let cli = Cli::parse_from(["timepick"]);
        let mut cfg = AppConfig::default();
        cli.apply(&mut cfg);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
