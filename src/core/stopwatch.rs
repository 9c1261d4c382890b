//! Elapsed-time accumulation and lap tracking.
//!
//! The `Stopwatch` is a pure, synchronously-queried state holder. It owns no
//! threads or timers; any periodic refresh (display redraw, summary update)
//! is the host's job, done by polling `elapsed()` on a cadence of the host's
//! choosing.

use std::time::{Duration, Instant};

use thiserror::Error;

use super::clock::{Clock, MonotonicClock};

// ============================================================================
// StopwatchError
// ============================================================================

/// Precondition violations for stopwatch operations.
///
/// Raised synchronously by the offending call; never deferred. Hosts that
/// want to hide these from users should disable the offending control or
/// check `is_running()` first.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchError {
    /// `record_lap` was called while the stopwatch was stopped.
    #[error("計測中ではないためラップを記録できません")]
    LapWhileStopped,

    /// `reset` was called while the stopwatch was running.
    #[error("計測中はリセットできません。先に停止してください")]
    ResetWhileRunning,
}

// ============================================================================
// Stopwatch
// ============================================================================

/// A reusable two-state (stopped/running) stopwatch.
///
/// Elapsed time is always computed as
/// `accumulated + (running ? now - segment start : 0)`; no other field is
/// ever read as "the" elapsed value. Completed segments are folded into
/// `accumulated` at the instant the segment ends, never earlier.
pub struct Stopwatch {
    /// Injected monotonic time source.
    clock: Box<dyn Clock>,
    /// Total duration of all completed segments.
    accumulated: Duration,
    /// Start instant of the live segment; `None` while stopped.
    segment_started_at: Option<Instant>,
    /// Lap marks in chronological order, each a total-elapsed snapshot.
    laps: Vec<Duration>,
}

impl Stopwatch {
    /// Creates a stopped stopwatch on the OS monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(MonotonicClock))
    }

    /// Creates a stopped stopwatch on the given clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            accumulated: Duration::ZERO,
            segment_started_at: None,
            laps: Vec::new(),
        }
    }

    /// Starts a new segment.
    ///
    /// Starting while already running is a no-op, so a double-start from a
    /// racing caller cannot corrupt the live segment.
    pub fn start(&mut self) {
        if self.segment_started_at.is_none() {
            self.segment_started_at = Some(self.clock.now());
        }
    }

    /// Ends the live segment, folding it into the accumulated total.
    ///
    /// Stopping while already stopped is a no-op.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.segment_started_at.take() {
            self.accumulated += self.clock.now().duration_since(started_at);
        }
    }

    /// Records the current elapsed time as a lap mark.
    ///
    /// The live segment continues; neither `accumulated` nor the segment
    /// start is touched. Returns the recorded lap value.
    ///
    /// # Errors
    ///
    /// Returns [`StopwatchError::LapWhileStopped`] if the stopwatch is not
    /// running. Callers need to distinguish "not running" from "recorded",
    /// so this is rejected rather than silently ignored.
    pub fn record_lap(&mut self) -> Result<Duration, StopwatchError> {
        if !self.is_running() {
            return Err(StopwatchError::LapWhileStopped);
        }

        let lap = self.elapsed();
        self.laps.push(lap);
        Ok(lap)
    }

    /// Clears the accumulated time and the lap list.
    ///
    /// # Errors
    ///
    /// Returns [`StopwatchError::ResetWhileRunning`] if the stopwatch is
    /// running; a live timer must be stopped before it can be reset.
    pub fn reset(&mut self) -> Result<(), StopwatchError> {
        if self.is_running() {
            return Err(StopwatchError::ResetWhileRunning);
        }

        self.accumulated = Duration::ZERO;
        self.laps.clear();
        Ok(())
    }

    /// Returns the current total elapsed time.
    ///
    /// Includes the live segment while running. Pure read; never fails.
    pub fn elapsed(&self) -> Duration {
        match self.segment_started_at {
            Some(started_at) => self.accumulated + self.clock.now().duration_since(started_at),
            None => self.accumulated,
        }
    }

    /// Returns the lap marks in chronological order.
    pub fn laps(&self) -> &[Duration] {
        &self.laps
    }

    /// Returns true while a segment is live.
    pub fn is_running(&self) -> bool {
        self.segment_started_at.is_some()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;

    fn create_stopwatch() -> (Stopwatch, ManualClock) {
        let clock = ManualClock::new();
        let stopwatch = Stopwatch::with_clock(Box::new(clock.clone()));
        (stopwatch, clock)
    }

    // ------------------------------------------------------------------------
    // Initial State Tests
    // ------------------------------------------------------------------------

    mod initial_state_tests {
        use super::*;

        #[test]
        fn test_new_is_stopped() {
            let (stopwatch, _clock) = create_stopwatch();

            assert!(!stopwatch.is_running());
            assert_eq!(stopwatch.elapsed(), Duration::ZERO);
            assert!(stopwatch.laps().is_empty());
        }

        #[test]
        fn test_default_is_stopped() {
            let stopwatch = Stopwatch::default();

            assert!(!stopwatch.is_running());
            assert_eq!(stopwatch.laps().len(), 0);
        }

        #[test]
        fn test_elapsed_is_zero_while_clock_advances_stopped() {
            let (stopwatch, clock) = create_stopwatch();

            clock.advance(Duration::from_secs(10));

            assert_eq!(stopwatch.elapsed(), Duration::ZERO);
        }
    }

    // ------------------------------------------------------------------------
    // Start / Stop Tests
    // ------------------------------------------------------------------------

    mod start_stop_tests {
        use super::*;

        #[test]
        fn test_start_begins_counting() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(500));

            assert!(stopwatch.is_running());
            assert_eq!(stopwatch.elapsed(), Duration::from_millis(500));
        }

        #[test]
        fn test_stop_freezes_elapsed() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(300));
            stopwatch.stop();
            clock.advance(Duration::from_secs(60));

            assert!(!stopwatch.is_running());
            assert_eq!(stopwatch.elapsed(), Duration::from_millis(300));
        }

        #[test]
        fn test_fold_accumulates_across_segments() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(300));
            stopwatch.stop();

            stopwatch.start();
            clock.advance(Duration::from_millis(200));
            stopwatch.stop();

            assert_eq!(stopwatch.elapsed(), Duration::from_millis(500));
        }

        #[test]
        fn test_double_start_is_noop() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            // A second start must not restart the live segment.
            stopwatch.start();
            clock.advance(Duration::from_millis(100));

            assert_eq!(stopwatch.elapsed(), Duration::from_millis(200));
        }

        #[test]
        fn test_double_stop_is_noop() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            stopwatch.stop();
            stopwatch.stop();

            assert_eq!(stopwatch.elapsed(), Duration::from_millis(100));
            assert!(!stopwatch.is_running());
        }

        #[test]
        fn test_stop_without_start_is_noop() {
            let (mut stopwatch, _clock) = create_stopwatch();

            stopwatch.stop();

            assert!(!stopwatch.is_running());
            assert_eq!(stopwatch.elapsed(), Duration::ZERO);
        }

        #[test]
        fn test_elapsed_survives_long_gap_between_calls() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            // No queries for a long stretch; elapsed comes from instants,
            // not tick counts.
            clock.advance(Duration::from_secs(3600));

            assert_eq!(stopwatch.elapsed(), Duration::from_secs(3600));
        }

        #[test]
        fn test_elapsed_is_monotonic_across_cycles() {
            let (mut stopwatch, clock) = create_stopwatch();
            let mut previous = Duration::ZERO;

            for _ in 0..5 {
                stopwatch.start();
                clock.advance(Duration::from_millis(70));
                let running = stopwatch.elapsed();
                assert!(running >= previous);
                previous = running;

                stopwatch.stop();
                let stopped = stopwatch.elapsed();
                assert!(stopped >= previous);
                previous = stopped;
            }
        }
    }

    // ------------------------------------------------------------------------
    // Lap Tests
    // ------------------------------------------------------------------------

    mod lap_tests {
        use super::*;

        #[test]
        fn test_lap_records_live_elapsed() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            let lap = stopwatch.record_lap().unwrap();

            assert_eq!(lap, Duration::from_millis(100));
            assert_eq!(stopwatch.laps(), &[Duration::from_millis(100)]);
        }

        #[test]
        fn test_laps_are_chronological_snapshots() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            stopwatch.record_lap().unwrap();
            clock.advance(Duration::from_millis(50));
            stopwatch.record_lap().unwrap();

            assert_eq!(
                stopwatch.laps(),
                &[Duration::from_millis(100), Duration::from_millis(150)]
            );
        }

        #[test]
        fn test_lap_does_not_disturb_elapsed() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            stopwatch.record_lap().unwrap();
            clock.advance(Duration::from_millis(25));

            // The segment kept running through the lap.
            assert_eq!(stopwatch.elapsed(), Duration::from_millis(125));
            assert!(stopwatch.is_running());
        }

        #[test]
        fn test_lap_spans_completed_segments() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(200));
            stopwatch.stop();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            let lap = stopwatch.record_lap().unwrap();

            // Lap value is total elapsed, not segment-local.
            assert_eq!(lap, Duration::from_millis(300));
        }

        #[test]
        fn test_lap_while_stopped_fails() {
            let (mut stopwatch, _clock) = create_stopwatch();

            let result = stopwatch.record_lap();

            assert_eq!(result, Err(StopwatchError::LapWhileStopped));
            assert!(stopwatch.laps().is_empty());
        }

        #[test]
        fn test_lap_after_stop_fails() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            stopwatch.stop();

            let result = stopwatch.record_lap();

            assert_eq!(result, Err(StopwatchError::LapWhileStopped));
        }

        #[test]
        fn test_laps_survive_stop() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            stopwatch.record_lap().unwrap();
            stopwatch.stop();

            assert_eq!(stopwatch.laps().len(), 1);
        }
    }

    // ------------------------------------------------------------------------
    // Reset Tests
    // ------------------------------------------------------------------------

    mod reset_tests {
        use super::*;

        #[test]
        fn test_reset_clears_elapsed_and_laps() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            stopwatch.record_lap().unwrap();
            stopwatch.stop();

            stopwatch.reset().unwrap();

            assert_eq!(stopwatch.elapsed(), Duration::ZERO);
            assert!(stopwatch.laps().is_empty());
            assert!(!stopwatch.is_running());
        }

        #[test]
        fn test_reset_while_running_fails() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));

            let result = stopwatch.reset();

            assert_eq!(result, Err(StopwatchError::ResetWhileRunning));
            // State untouched by the failed reset.
            assert_eq!(stopwatch.elapsed(), Duration::from_millis(100));
        }

        #[test]
        fn test_reset_is_idempotent() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            stopwatch.stop();

            stopwatch.reset().unwrap();
            stopwatch.reset().unwrap();

            assert_eq!(stopwatch.elapsed(), Duration::ZERO);
            assert!(stopwatch.laps().is_empty());
        }

        #[test]
        fn test_reusable_after_reset() {
            let (mut stopwatch, clock) = create_stopwatch();

            stopwatch.start();
            clock.advance(Duration::from_millis(100));
            stopwatch.stop();
            stopwatch.reset().unwrap();

            stopwatch.start();
            clock.advance(Duration::from_millis(40));

            assert_eq!(stopwatch.elapsed(), Duration::from_millis(40));
        }
    }

    // ------------------------------------------------------------------------
    // Error Tests
    // ------------------------------------------------------------------------

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_display_lap_while_stopped() {
            let err = StopwatchError::LapWhileStopped;
            assert!(err.to_string().contains("ラップ"));
        }

        #[test]
        fn test_error_display_reset_while_running() {
            let err = StopwatchError::ResetWhileRunning;
            assert!(err.to_string().contains("リセット"));
        }

        #[test]
        fn test_error_clone_and_eq() {
            let err = StopwatchError::LapWhileStopped;
            assert_eq!(err, err.clone());
            assert_ne!(err, StopwatchError::ResetWhileRunning);
        }
    }
}
