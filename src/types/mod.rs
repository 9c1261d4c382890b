//! Core data types for the Stopwatch CLI.
//!
//! This module defines the data structures used for:
//! - Run-state representation
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};

use crate::core::Stopwatch;

// ============================================================================
// RunState
// ============================================================================

/// Represents whether the stopwatch is counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No live segment
    Stopped,
    /// A segment is live
    Running,
}

impl RunState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
        }
    }

    /// Returns true if a segment is live.
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

impl Default for RunState {
    fn default() -> Self {
        RunState::Stopped
    }
}

impl From<bool> for RunState {
    fn from(running: bool) -> Self {
        if running {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }
}

// ============================================================================
// IPC Types
// ============================================================================

/// IPC request from client to daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum IpcRequest {
    /// Start the stopwatch
    Start,
    /// Stop the stopwatch
    Stop,
    /// Record a lap mark
    Lap,
    /// Reset elapsed time and laps
    Reset,
    /// Query the current status
    Status,
}

/// Response data for IPC responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    /// Current run state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Total elapsed time in milliseconds
    #[serde(rename = "elapsedMs", skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
    /// Lap marks in milliseconds, chronological order
    #[serde(rename = "lapsMs", skip_serializing_if = "Option::is_none")]
    pub laps_ms: Option<Vec<u64>>,
}

impl ResponseData {
    /// Creates response data by snapshotting a stopwatch.
    pub fn from_stopwatch(stopwatch: &Stopwatch) -> Self {
        Self {
            state: Some(RunState::from(stopwatch.is_running()).as_str().to_string()),
            elapsed_ms: Some(stopwatch.elapsed().as_millis() as u64),
            laps_ms: Some(
                stopwatch
                    .laps()
                    .iter()
                    .map(|lap| lap.as_millis() as u64)
                    .collect(),
            ),
        }
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Optional response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
