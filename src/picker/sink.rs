//! Collaborators injected into the engine.

use super::time::ParseError;

/// Receives the `HH:MM` string produced by a successful confirm.
pub trait TimeSink {
    fn time_selected(&mut self, time: &str);
}

impl<F> TimeSink for F
where
    F: FnMut(&str),
{
    fn time_selected(&mut self, time: &str) {
        self(time)
    }
}

/// Receives configuration strings that failed to parse.
pub trait ParseReporter {
    fn parse_failed(&mut self, field: &'static str, error: &ParseError);
}

/// Reports parse failures as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ParseReporter for TracingReporter {
    fn parse_failed(&mut self, field: &'static str, error: &ParseError) {
        tracing::warn!(field, text = error.text(), reason = %error.kind(), "{}", error);
    }
}
