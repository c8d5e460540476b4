// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C4 contract types: the window-subprocess descriptor and outcome.
//!
//! Mirrors SPEC_FULL.md §6's window-subprocess contract. `WindowAction` keeps
//! `action` and `message` orthogonal by construction (§9.1's error-path
//! ambiguity resolution) — there is no variant meaning "successful failure".

use serde::{Deserialize, Serialize};

use crate::queue::RequestId;

/// The outcome a `reo-window` child process reports on its single stdout line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowAction {
    Success,
    DirectFeedback,
    Timeout,
    ParentKilled,
    Error,
}

/// One line of JSON the window subprocess writes to stdout before exiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestWindowOutcome {
    pub action: WindowAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RequestWindowOutcome {
    pub fn success() -> Self {
        Self {
            action: WindowAction::Success,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            action: WindowAction::Error,
            message: Some(message.into()),
        }
    }
}

/// The descriptor file written by the Window Manager before spawning
/// `reo-window` (SPEC_FULL.md §4.4.1) — replaces the reference
/// implementation's templated-source-code anti-pattern with a fixed binary
/// reading structured input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub request_id: RequestId,
    pub title: String,
    /// Base64-encoded command text (never crosses a shell command-line
    /// boundary — it travels inside this JSON file).
    pub command_b64: String,
    pub timeout_ms: u64,
    pub orchestrator_pid: u32,
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
