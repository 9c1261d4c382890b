//! Stopwatch engine for the daemon.
//!
//! This module wraps the stopwatch core for the daemon host:
//! - Forwards start/stop/lap/reset/status operations
//! - Fires events for logging and external integrations
//! - Reports whether start/stop actually transitioned, so callers can
//!   phrase idempotent no-ops without treating them as failures
//!
//! The engine never schedules its own ticks; the daemon owns the summary
//! loop and asks the engine to emit `Tick` events on its cadence.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::core::{Clock, Stopwatch};

// ============================================================================
// StopwatchEvent
// ============================================================================

/// Stopwatch events for logging and external integrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwatchEvent {
    /// A new segment started
    Started,
    /// The live segment ended
    Stopped {
        /// Total elapsed time after the fold
        elapsed: Duration,
    },
    /// A lap mark was recorded
    LapRecorded {
        /// 1-based lap number
        index: usize,
        /// Recorded total-elapsed snapshot
        lap: Duration,
    },
    /// Elapsed time and laps were cleared
    Reset,
    /// Periodic summary tick while running
    Tick {
        /// Current total elapsed time
        elapsed: Duration,
    },
}

// ============================================================================
// StopwatchEngine
// ============================================================================

/// Engine that owns the stopwatch core on behalf of the daemon.
pub struct StopwatchEngine {
    /// The timing core
    stopwatch: Stopwatch,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<StopwatchEvent>,
}

impl StopwatchEngine {
    /// Creates a new engine on the OS monotonic clock.
    pub fn new(event_tx: mpsc::UnboundedSender<StopwatchEvent>) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            event_tx,
        }
    }

    /// Creates a new engine on the given clock.
    pub fn with_clock(clock: Box<dyn Clock>, event_tx: mpsc::UnboundedSender<StopwatchEvent>) -> Self {
        Self {
            stopwatch: Stopwatch::with_clock(clock),
            event_tx,
        }
    }

    /// Starts the stopwatch.
    ///
    /// Returns `true` if a new segment started, `false` if it was already
    /// running (a no-op; no event is fired).
    pub fn start(&mut self) -> Result<bool> {
        if self.stopwatch.is_running() {
            return Ok(false);
        }

        self.stopwatch.start();

        self.event_tx
            .send(StopwatchEvent::Started)
            .context("Failed to send started event")?;

        Ok(true)
    }

    /// Stops the stopwatch.
    ///
    /// Returns `true` if a live segment was folded, `false` if it was
    /// already stopped (a no-op; no event is fired).
    pub fn stop(&mut self) -> Result<bool> {
        if !self.stopwatch.is_running() {
            return Ok(false);
        }

        self.stopwatch.stop();

        self.event_tx
            .send(StopwatchEvent::Stopped {
                elapsed: self.stopwatch.elapsed(),
            })
            .context("Failed to send stopped event")?;

        Ok(true)
    }

    /// Records a lap mark and returns it.
    ///
    /// # Errors
    ///
    /// Returns `StopwatchError::LapWhileStopped` if the stopwatch is not
    /// running.
    pub fn lap(&mut self) -> Result<Duration> {
        let lap = self.stopwatch.record_lap()?;
        let index = self.stopwatch.laps().len();

        self.event_tx
            .send(StopwatchEvent::LapRecorded { index, lap })
            .context("Failed to send lap event")?;

        Ok(lap)
    }

    /// Clears elapsed time and laps.
    ///
    /// # Errors
    ///
    /// Returns `StopwatchError::ResetWhileRunning` if the stopwatch is
    /// running.
    pub fn reset(&mut self) -> Result<()> {
        self.stopwatch.reset()?;

        self.event_tx
            .send(StopwatchEvent::Reset)
            .context("Failed to send reset event")?;

        Ok(())
    }

    /// Emits a `Tick` event carrying the current elapsed time.
    ///
    /// Called by the daemon's summary loop; does nothing while stopped.
    pub fn emit_tick(&self) -> Result<()> {
        if !self.stopwatch.is_running() {
            return Ok(());
        }

        self.event_tx
            .send(StopwatchEvent::Tick {
                elapsed: self.stopwatch.elapsed(),
            })
            .context("Failed to send tick event")?;

        Ok(())
    }

    /// Returns true while a segment is live.
    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    /// Returns a reference to the underlying stopwatch.
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }
}

// ============================================================================
// Tests
// ============================================================================
