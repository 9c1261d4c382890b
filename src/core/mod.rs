//! Stopwatch core for the Stopwatch CLI.
//!
//! This module contains the timing logic that every host surface builds on:
//! - `clock`: Monotonic time source abstraction with a manual test clock
//! - `stopwatch`: Elapsed-time accumulation and lap-tracking state machine
//! - `format`: Pure elapsed-time formatting utilities

pub mod clock;
pub mod format;
pub mod stopwatch;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use self::stopwatch::{Stopwatch, StopwatchError};
