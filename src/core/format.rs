//! Elapsed-time formatting.
//!
//! Pure functions from a duration to a display string. The fine format is
//! used by the live display, the coarse one by the once-a-second summary.

use std::time::Duration;

/// Formats a duration as `m:ss.cc` (centiseconds truncated, not rounded).
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let centis = (total_ms % 1_000) / 10;
    format!("{}:{:02}.{:02}", minutes, seconds, centis)
}

/// Formats a duration as `m:ss`, dropping sub-second precision.
pub fn format_elapsed_coarse(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

// ============================================================================
// Tests
// ============================================================================
