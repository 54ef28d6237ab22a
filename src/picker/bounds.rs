//! Bounds checking and the hour/minute availability filter.
//!
//! Bounds are inclusive. Only the boundary hours restrict minutes: with bounds
//! `09:30`-`17:00`, hour 9 offers minutes 30-59, hour 17 offers only minute 0,
//! and every hour in between offers the full 0-59 range.

use super::time::{TimeOfDay, HOURS_PER_DAY, MINUTES_PER_HOUR};
use std::ops::RangeInclusive;
use thiserror::Error;

/// The lower bound is not strictly before the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Start time must be before end time")]
pub struct BoundsError {
    pub lower: TimeOfDay,
    pub upper: TimeOfDay,
}

pub type ValidationResult = Result<(), BoundsError>;

/// Optional inclusive limits on the selectable times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBounds {
    pub lower: Option<TimeOfDay>,
    pub upper: Option<TimeOfDay>,
}

impl TimeBounds {
    pub fn new(lower: Option<TimeOfDay>, upper: Option<TimeOfDay>) -> Self {
        Self { lower, upper }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> ValidationResult {
        validate_bounds(self.lower, self.upper)
    }

    /// Hours the user may pick, ascending.
    pub fn selectable_hours(&self) -> RangeInclusive<u8> {
        let first = self.lower.map_or(0, |t| t.hour());
        let last = self.upper.map_or(HOURS_PER_DAY - 1, |t| t.hour());
        first..=last
    }

    /// Minutes the user may pick once `hour` is chosen, ascending.
    ///
    /// `hour` must come from [`selectable_hours`](Self::selectable_hours).
    pub fn selectable_minutes(&self, hour: u8) -> RangeInclusive<u8> {
        debug_assert!(
            self.selectable_hours().contains(&hour),
            "hour {} is outside the selectable hours",
            hour
        );
        let first = match self.lower {
            Some(lower) if lower.hour() == hour => lower.minute(),
            _ => 0,
        };
        let last = match self.upper {
            Some(upper) if upper.hour() == hour => upper.minute(),
            _ => MINUTES_PER_HOUR - 1,
        };
        first..=last
    }

    pub fn contains_hour(&self, hour: u8) -> bool {
        self.selectable_hours().contains(&hour)
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.contains_hour(time.hour()) && self.selectable_minutes(time.hour()).contains(&time.minute())
    }
}

/// Check that `lower` is strictly before `upper`. Absent bounds always pass.
pub fn validate_bounds(lower: Option<TimeOfDay>, upper: Option<TimeOfDay>) -> ValidationResult {
    match (lower, upper) {
        (Some(lower), Some(upper)) if lower >= upper => Err(BoundsError { lower, upper }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    fn office_hours() -> TimeBounds {
        TimeBounds::new(Some(t(9, 30)), Some(t(17, 0)))
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(validate_bounds(Some(t(9, 0)), Some(t(17, 0))), Ok(()));
        assert_eq!(validate_bounds(Some(t(9, 0)), Some(t(9, 1))), Ok(()));

        let err = validate_bounds(Some(t(17, 0)), Some(t(9, 0))).unwrap_err();
        assert_eq!(err.to_string(), "Start time must be before end time");
        assert!(validate_bounds(Some(t(9, 0)), Some(t(9, 0))).is_err());
        assert!(validate_bounds(Some(t(9, 30)), Some(t(9, 10))).is_err());
    }

    #[test]
    fn test_validate_bounds_absent_side_is_valid() {
        assert_eq!(validate_bounds(None, None), Ok(()));
        assert_eq!(validate_bounds(Some(t(23, 59)), None), Ok(()));
        assert_eq!(validate_bounds(None, Some(t(0, 0))), Ok(()));
    }

    #[test]
    fn test_selectable_hours() {
        assert_eq!(office_hours().selectable_hours().collect::<Vec<_>>(), (9..=17).collect::<Vec<_>>());
        assert_eq!(TimeBounds::unbounded().selectable_hours().count(), 24);
        assert_eq!(TimeBounds::new(Some(t(20, 15)), None).selectable_hours(), 20..=23);
        assert_eq!(TimeBounds::new(None, Some(t(3, 0))).selectable_hours(), 0..=3);
    }

    #[test]
    fn test_selectable_minutes_only_restricts_boundary_hours() {
        let bounds = office_hours();
        assert_eq!(bounds.selectable_minutes(9), 30..=59);
        assert_eq!(bounds.selectable_minutes(17).collect::<Vec<_>>(), vec![0]);
        assert_eq!(bounds.selectable_minutes(12), 0..=59);
    }

    #[test]
    fn test_selectable_minutes_same_hour_bounds() {
        let bounds = TimeBounds::new(Some(t(12, 15)), Some(t(12, 45)));
        assert_eq!(bounds.selectable_hours(), 12..=12);
        assert_eq!(bounds.selectable_minutes(12), 15..=45);
    }

    #[test]
    fn test_inverted_bounds_select_nothing() {
        let bounds = TimeBounds::new(Some(t(17, 0)), Some(t(9, 0)));
        assert!(bounds.validate().is_err());
        assert_eq!(bounds.selectable_hours().count(), 0);

        let bounds = TimeBounds::new(Some(t(9, 40)), Some(t(9, 10)));
        assert_eq!(bounds.selectable_hours(), 9..=9);
        assert_eq!(bounds.selectable_minutes(9).count(), 0);
    }

    #[test]
    fn test_sequences_are_restartable() {
        let hours = office_hours().selectable_hours();
        let first: Vec<_> = hours.clone().collect();
        let second: Vec<_> = hours.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_contains() {
        let bounds = office_hours();
        assert!(bounds.contains(t(9, 30)));
        assert!(bounds.contains(t(17, 0)));
        assert!(!bounds.contains(t(9, 29)));
        assert!(!bounds.contains(t(17, 1)));
        assert!(!bounds.contains(t(20, 0)));
    }
}
