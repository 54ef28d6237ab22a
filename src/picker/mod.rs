//! Time selection core: parsing, bounds, availability and the selection
//! state machine. Rendering lives elsewhere and drives this through
//! [`TimeSelectionEngine`].

pub mod bounds;
pub mod engine;
pub mod sink;
pub mod time;

pub use bounds::{validate_bounds, BoundsError, TimeBounds, ValidationResult};
pub use engine::{EngineConfig, PickerError, PickerOptions, SelectionState, TimeSelectionEngine};
pub use sink::{ParseReporter, TimeSink, TracingReporter};
pub use time::{parse_time, to_12_hour, to_12_hour_time, ParseError, ParseErrorKind, TimeOfDay};
