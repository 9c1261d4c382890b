//! Daemon module for the Stopwatch CLI.
//!
//! This module contains the long-lived host that owns the stopwatch core:
//! - `engine`: Stopwatch engine with operations and event firing
//! - `ipc`: Unix Domain Socket server and request handler
//!
//! The daemon outlives any CLI invocation, so the stopwatch keeps counting
//! while no display surface is attached.

pub mod engine;
pub mod ipc;

pub use engine::{StopwatchEngine, StopwatchEvent};
pub use ipc::{IpcServer, RequestHandler};

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};

use crate::core::format::{format_elapsed, format_elapsed_coarse};

// ============================================================================
// Constants
// ============================================================================

/// Interval between coarse summary ticks in milliseconds.
const SUMMARY_INTERVAL_MS: u64 = 1000;

// ============================================================================
// Daemon runtime
// ============================================================================

/// Runs the daemon on the given socket until Ctrl-C.
///
/// Owns the engine, the once-a-second summary loop, and the event log.
/// Requests are served sequentially; every operation is O(1).
pub async fn run(socket_path: &Path) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(StopwatchEngine::new(event_tx)));
    let server = IpcServer::new(socket_path)?;
    let handler = RequestHandler::new(engine.clone());

    let summary_handle = tokio::spawn(summary_loop(engine.clone()));
    let event_handle = tokio::spawn(log_events(event_rx));

    info!("Daemonを起動しました: {:?}", server.socket_path());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Daemonを終了します");
                break;
            }
            accepted = server.accept() => {
                let mut stream = match accepted {
                    Ok(stream) => stream,
                    Err(e) => {
                        warn!("接続の受け付けに失敗しました: {}", e);
                        continue;
                    }
                };

                match IpcServer::receive_request(&mut stream).await {
                    Ok(request) => {
                        let response = handler.handle(request).await;
                        if let Err(e) = IpcServer::send_response(&mut stream, &response).await {
                            warn!("レスポンスの送信に失敗しました: {}", e);
                        }
                    }
                    Err(e) => warn!("不正なリクエストを受信しました: {}", e),
                }
            }
        }
    }

    summary_handle.abort();
    event_handle.abort();

    Ok(())
}

/// Emits a `Tick` event on a fixed cadence while the stopwatch runs.
///
/// The cadence belongs to this loop, not to the core; the core is only
/// queried. Missed ticks are skipped rather than bursted.
async fn summary_loop(engine: Arc<Mutex<StopwatchEngine>>) {
    let mut ticker = interval(Duration::from_millis(SUMMARY_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let engine = engine.lock().await;
        if let Err(e) = engine.emit_tick() {
            warn!("Tickイベントの送信に失敗しました: {}", e);
            break;
        }
    }
}

/// Logs engine events.
///
/// The `Tick` line is the coarse summary surface shown while no display
/// surface is attached.
async fn log_events(mut event_rx: mpsc::UnboundedReceiver<StopwatchEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            StopwatchEvent::Started => info!("計測を開始しました"),
            StopwatchEvent::Stopped { elapsed } => {
                info!("計測を停止しました: {}", format_elapsed(elapsed));
            }
            StopwatchEvent::LapRecorded { index, lap } => {
                info!("ラップ {}: {}", index, format_elapsed(lap));
            }
            StopwatchEvent::Reset => info!("リセットしました"),
            StopwatchEvent::Tick { elapsed } => {
                info!("経過時間: {}", format_elapsed_coarse(elapsed));
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
