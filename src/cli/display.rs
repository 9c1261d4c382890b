//! Display utilities for the Stopwatch CLI.
//!
//! This module provides formatted output for:
//! - Success messages
//! - Error messages
//! - Status and lap display
//! - The in-place watch line

use std::io::Write;
use std::time::Duration;

use crate::core::format::format_elapsed;
use crate::types::IpcResponse;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the message for a start command.
    pub fn show_start_success(response: &IpcResponse) {
        println!("> {}", response.message);
        Self::show_elapsed_line(response);
    }

    /// Shows the message for a stop command.
    pub fn show_stop_success(response: &IpcResponse) {
        println!("[] {}", response.message);
        Self::show_elapsed_line(response);
    }

    /// Shows the message for a lap command, with the latest lap time.
    pub fn show_lap_success(response: &IpcResponse) {
        println!("+ {}", response.message);

        if let Some(data) = &response.data {
            if let Some(laps) = &data.laps_ms {
                if let Some(latest) = laps.last() {
                    println!(
                        "  ラップ {}: {}",
                        laps.len(),
                        format_elapsed(Duration::from_millis(*latest))
                    );
                }
            }
        }
    }

    /// Shows the message for a reset command.
    pub fn show_reset_success(response: &IpcResponse) {
        println!("* {}", response.message);
    }

    /// Shows the current stopwatch status.
    pub fn show_status(response: &IpcResponse) {
        println!("ストップウォッチ ステータス");
        println!("─────────────────────────────");

        if let Some(data) = &response.data {
            let state = data.state.as_deref().unwrap_or("unknown");
            let state_display = match state {
                "running" => "計測中",
                "stopped" => "停止中",
                _ => state,
            };
            println!("状態: {}", state_display);

            if let Some(elapsed) = data.elapsed_ms {
                println!(
                    "経過時間: {}",
                    format_elapsed(Duration::from_millis(elapsed))
                );
            }

            if let Some(laps) = &data.laps_ms {
                if !laps.is_empty() {
                    println!("ラップ:");
                    for (index, lap) in laps.iter().enumerate() {
                        println!(
                            "  {}: {}",
                            index + 1,
                            format_elapsed(Duration::from_millis(*lap))
                        );
                    }
                }
            }
        } else {
            println!("ストップウォッチは起動していません");
        }
    }

    /// Redraws the watch line in place.
    pub fn show_watch_line(response: &IpcResponse) {
        if let Some(data) = &response.data {
            if let Some(elapsed) = data.elapsed_ms {
                let laps = data
                    .laps_ms
                    .as_ref()
                    .map(|laps| laps.len())
                    .unwrap_or_default();

                print!(
                    "\r経過時間: {}  ラップ: {}  ",
                    format_elapsed(Duration::from_millis(elapsed)),
                    laps
                );
                let _ = std::io::stdout().flush();
            }
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }

    /// Prints the shared elapsed-time line under a command message.
    fn show_elapsed_line(response: &IpcResponse) {
        if let Some(data) = &response.data {
            if let Some(elapsed) = data.elapsed_ms {
                println!(
                    "  経過時間: {}",
                    format_elapsed(Duration::from_millis(elapsed))
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
