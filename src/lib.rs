//! Bounded hour-then-minute time selection.
//!
//! The [`picker`] module holds the engine; the `timepick` binary renders it in
//! the terminal.

pub mod picker;
