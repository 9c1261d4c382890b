//! Command definitions for the Stopwatch CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Stopwatch CLI - a daemon-backed stopwatch with lap tracking
#[derive(Parser, Debug)]
#[command(
    name = "stopwatch",
    version,
    about = "ラップ記録つきストップウォッチCLI",
    long_about = "ターミナル上で動作するシンプルなストップウォッチ。\n\
                  計測はDaemonプロセスが保持するため、コマンドの合間も止まりません。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the stopwatch (no-op if already running)
    Start,

    /// Stop the stopwatch (no-op if already stopped)
    Stop,

    /// Record a lap mark (fails while stopped)
    Lap,

    /// Clear elapsed time and laps (fails while running)
    Reset,

    /// Show current elapsed time and laps
    Status,

    /// Continuously display elapsed time until Ctrl-C
    Watch(WatchArgs),

    /// Run as daemon (background service)
    Daemon(DaemonArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Watch Command Arguments
// ============================================================================

/// Arguments for the watch command
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Refresh interval in milliseconds (10-5000)
    #[arg(
        short,
        long,
        default_value = "100",
        value_parser = clap::value_parser!(u64).range(10..=5000)
    )]
    pub interval: u64,
}

impl Default for WatchArgs {
    fn default() -> Self {
        Self { interval: 100 }
    }
}

// ============================================================================
// Daemon Command Arguments
// ============================================================================

/// Arguments for the daemon command
#[derive(Args, Debug, Clone, Default)]
pub struct DaemonArgs {
    /// Socket path (defaults to ~/.stopwatch/stopwatch.sock)
    #[arg(long)]
    pub socket: Option<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================
