//! Monotonic time sources for the stopwatch core.
//!
//! The stopwatch never reads the system clock directly. It asks an injected
//! `Clock` for the current instant, so production code runs on the OS
//! monotonic clock while tests drive time by hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// ============================================================================
// Clock
// ============================================================================

/// A source of monotonic instants.
///
/// Implementations must be monotonic: successive calls to `now` never move
/// backwards, regardless of wall-clock adjustments (NTP, DST, manual changes).
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

// ============================================================================
// MonotonicClock
// ============================================================================

/// The production clock, backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// ============================================================================
// ManualClock
// ============================================================================

/// A clock that only moves when told to.
///
/// Cloning shares the underlying offset, so a test can hold one handle to
/// advance time while the stopwatch under test holds another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    /// Fixed reference point captured at construction.
    origin: Instant,
    /// Nanoseconds advanced past the origin.
    offset_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a manual clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advances the clock by the given duration.
    pub fn advance(&self, duration: Duration) {
        self.offset_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset_nanos.load(Ordering::SeqCst);
        self.origin + Duration::from_nanos(offset)
    }
}

// ============================================================================
// Tests
// ============================================================================
