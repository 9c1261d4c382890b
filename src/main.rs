//! Stopwatch CLI - a daemon-backed stopwatch with lap tracking
//!
//! The daemon process owns the timer, so elapsed time keeps counting
//! between commands and while no display is attached:
//! - `start` / `stop` toggle the measurement
//! - `lap` records split marks while running
//! - `status` / `watch` display elapsed time and laps

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::time::{interval, Duration, MissedTickBehavior};

pub mod cli;
pub mod core;
pub mod daemon;
pub mod types;

use cli::{Cli, Commands, DaemonArgs, Display, IpcClient, WatchArgs};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Start) => {
            let client = IpcClient::new()?;
            let response = client.start().await?;
            Display::show_start_success(&response);
        }
        Some(Commands::Stop) => {
            let client = IpcClient::new()?;
            let response = client.stop().await?;
            Display::show_stop_success(&response);
        }
        Some(Commands::Lap) => {
            let client = IpcClient::new()?;
            let response = client.lap().await?;
            Display::show_lap_success(&response);
        }
        Some(Commands::Reset) => {
            let client = IpcClient::new()?;
            let response = client.reset().await?;
            Display::show_reset_success(&response);
        }
        Some(Commands::Status) => {
            let client = IpcClient::new()?;
            let response = client.status().await?;
            Display::show_status(&response);
        }
        Some(Commands::Watch(args)) => {
            watch(args).await?;
        }
        Some(Commands::Daemon(args)) => {
            run_daemon(args).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Polls the daemon and redraws the elapsed time until Ctrl-C.
async fn watch(args: WatchArgs) -> Result<()> {
    let client = IpcClient::new()?;

    let mut ticker = interval(Duration::from_millis(args.interval));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
            _ = ticker.tick() => {
                let response = client.status().await?;
                Display::show_watch_line(&response);
            }
        }
    }

    Ok(())
}

/// Runs the daemon on the configured socket.
async fn run_daemon(args: DaemonArgs) -> Result<()> {
    let socket_path = match args.socket {
        Some(path) => path,
        None => IpcClient::default_socket_path()?,
    };

    daemon::run(&socket_path).await
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["stopwatch"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["stopwatch", "status"]);
        assert!(matches!(cli.command, Some(Commands::Status)));
    }

    #[test]
    fn test_cli_parse_start() {
        let cli = Cli::parse_from(["stopwatch", "start"]);
        assert!(matches!(cli.command, Some(Commands::Start)));
    }

    #[test]
    fn test_cli_parse_watch_with_interval() {
        let cli = Cli::parse_from(["stopwatch", "watch", "--interval", "500"]);
        match cli.command {
            Some(Commands::Watch(args)) => assert_eq!(args.interval, 500),
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["stopwatch", "--verbose", "status"]);
        assert!(cli.verbose);
    }
}
