// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C7: the JSON result file the remote side writes back (§3 `Result`, §4.7).

use serde::{Deserialize, Serialize};

/// Maximum accepted size, in bytes, of a result file (§4.7 size policy).
pub const MAX_RESULT_BYTES: u64 = 4 * 1024 * 1024;

/// The parsed contents of a remote result file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResult {
    pub success: bool,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    pub exit_code: i32,
    /// Set by the remote side when `stdout` was cut off at the size bound.
    #[serde(default)]
    pub truncated: bool,
}

impl RemoteResult {
    pub fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
