//! Time-of-day values and the `HH:MM` grammar.
//!
//! Accepted input is exactly `H:MM` or `HH:MM` in 24-hour form: the hour is a
//! single digit, `00`-`19`, or `20`-`23`, and the minute is always two digits.
//! Whitespace, seconds and AM/PM suffixes are rejected.

use chrono::{Local, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;

/// A wall-clock time with minute precision.
///
/// Ordering is lexicographic on `(hour, minute)`, which is the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Returns `None` if either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < HOURS_PER_DAY && minute < MINUTES_PER_HOUR {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Current local time, truncated to the minute.
    pub fn now() -> Self {
        Self::from(Local::now().time())
    }

    /// 12-hour rendering with minutes, e.g. `1:05 PM`.
    pub fn to_12_hour(&self) -> String {
        to_12_hour_time(self.hour, self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), 0).unwrap_or_default()
    }
}

/// Why a time string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No single `:` between hour and minute.
    MissingSeparator,
    /// Hour is not `0`-`23` written with one or two digits.
    InvalidHour,
    /// Minute is not `00`-`59` written with exactly two digits.
    InvalidMinute,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ParseErrorKind::MissingSeparator => "expected a single ':' separator",
            ParseErrorKind::InvalidHour => "hour must be 0-23",
            ParseErrorKind::InvalidMinute => "minute must be 00-59",
        };
        f.write_str(reason)
    }
}

/// A time string that does not match `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid time format: {text:?} ({kind}). Expected format: HH:MM")]
pub struct ParseError {
    text: String,
    kind: ParseErrorKind,
}

impl ParseError {
    fn new(text: &str, kind: ParseErrorKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
        }
    }

    /// The rejected input, unmodified.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Parse an optional time string.
///
/// Missing and empty input mean "no time" and yield `Ok(None)`; anything else
/// must match the `HH:MM` grammar.
pub fn parse_time(text: Option<&str>) -> Result<Option<TimeOfDay>, ParseError> {
    match text {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some),
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parts = text.split(':');
        let (hour, minute) = match (parts.next(), parts.next(), parts.next()) {
            (Some(hour), Some(minute), None) => (hour, minute),
            _ => return Err(ParseError::new(text, ParseErrorKind::MissingSeparator)),
        };

        let hour = parse_hour(hour).ok_or_else(|| ParseError::new(text, ParseErrorKind::InvalidHour))?;
        let minute =
            parse_minute(minute).ok_or_else(|| ParseError::new(text, ParseErrorKind::InvalidMinute))?;

        Ok(Self { hour, minute })
    }
}

fn digit(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

// [0-1]?[0-9] | 2[0-3]
fn parse_hour(s: &str) -> Option<u8> {
    match *s.as_bytes() {
        [d] => digit(d),
        [t, u] => {
            let (t, u) = (digit(t)?, digit(u)?);
            let hour = t * 10 + u;
            (t <= 1 || hour < HOURS_PER_DAY).then_some(hour)
        }
        _ => None,
    }
}

// [0-5][0-9]
fn parse_minute(s: &str) -> Option<u8> {
    match *s.as_bytes() {
        [t, u] => {
            let (t, u) = (digit(t)?, digit(u)?);
            (t <= 5).then_some(t * 10 + u)
        }
        _ => None,
    }
}

/// Hour-only 12-hour label, e.g. `12 AM` for hour 0.
pub fn to_12_hour(hour: u8) -> String {
    format!("{} {}", twelve_hour(hour), period(hour))
}

/// 12-hour label with zero-padded minutes, e.g. `1:05 PM`.
pub fn to_12_hour_time(hour: u8, minute: u8) -> String {
    format!("{}:{:02} {}", twelve_hour(hour), minute, period(hour))
}

fn twelve_hour(hour: u8) -> u8 {
    let hour = hour % 12;
    if hour == 0 {
        12
    } else {
        hour
    }
}

fn period(hour: u8) -> &'static str {
    if hour < 12 {
        "AM"
    } else {
        "PM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn test_parse_round_trips_every_minute_of_the_day() {
        for hour in 0..HOURS_PER_DAY {
            for minute in 0..MINUTES_PER_HOUR {
                let time = t(hour, minute);
                let text = time.to_string();
                assert_eq!(parse_time(Some(text.as_str())), Ok(Some(time)), "{}", text);
            }
        }
    }

    #[test]
    fn test_parse_accepts_single_digit_hour() {
        assert_eq!(parse_time(Some("9:30")), Ok(Some(t(9, 30))));
        assert_eq!(parse_time(Some("0:00")), Ok(Some(t(0, 0))));
        assert_eq!(parse_time(Some("19:59")), Ok(Some(t(19, 59))));
    }

    #[test]
    fn test_parse_empty_is_no_time() {
        assert_eq!(parse_time(None), Ok(None));
        assert_eq!(parse_time(Some("")), Ok(None));
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_malformed() {
        let err = parse_time(Some("25:00")).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidHour);
        assert_eq!(err.text(), "25:00");

        let err = parse_time(Some("12:60")).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidMinute);

        let err = parse_time(Some("9-30")).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingSeparator);

        for bad in ["24:00", "9:5", "09:300", "009:00", "12:30:00", " 9:30", "9:30 ", "ab:cd", "+9:30", ":30", "9:"] {
            assert!(parse_time(Some(bad)).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_from_str_requires_a_value() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert_eq!("7:05".parse::<TimeOfDay>(), Ok(t(7, 5)));
    }

    #[test]
    fn test_parse_error_message_names_the_input() {
        let err = parse_time(Some("noon")).unwrap_err();
        assert!(err.to_string().contains("\"noon\""));
        assert!(err.to_string().contains("HH:MM"));
    }

    #[test]
    fn test_ordering_is_hour_then_minute() {
        assert!(t(9, 59) < t(10, 0));
        assert!(t(10, 0) < t(10, 1));
        assert_eq!(t(10, 1).cmp(&t(10, 1)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0).is_none());
        assert!(TimeOfDay::new(0, 60).is_none());
        assert!(TimeOfDay::new(23, 59).is_some());
    }

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour(0), "12 AM");
        assert_eq!(to_12_hour(11), "11 AM");
        assert_eq!(to_12_hour(12), "12 PM");
        assert_eq!(to_12_hour(13), "1 PM");
        assert_eq!(to_12_hour(23), "11 PM");
        assert_eq!(to_12_hour_time(13, 5), "1:05 PM");
        assert_eq!(to_12_hour_time(0, 0), "12:00 AM");
        assert_eq!(t(12, 30).to_12_hour(), "12:30 PM");
    }

    #[test]
    fn test_naive_time_conversion() {
        let naive = NaiveTime::from_hms_opt(14, 7, 42).unwrap();
        assert_eq!(TimeOfDay::from(naive), t(14, 7));
        assert_eq!(NaiveTime::from(t(14, 7)), NaiveTime::from_hms_opt(14, 7, 0).unwrap());
    }
}
