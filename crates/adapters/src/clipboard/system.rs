// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! System clipboard adapter, shelling out to the platform clipboard utility.
//!
//! No pack manifest depends on a clipboard crate (`arboard` et al.), so this
//! is grounded directly in `subprocess::run_with_timeout`'s shell-out pattern
//! rather than introducing an ungrounded dependency.

use super::{ClipboardAdapter, ClipboardError};
use crate::subprocess::{self, CLIPBOARD_TIMEOUT};
use async_trait::async_trait;
use tokio::process::Command;

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboardAdapter;

impl SystemClipboardAdapter {
    pub fn new() -> Self {
        Self
    }

    fn command() -> Result<Command, ClipboardError> {
        if cfg!(target_os = "macos") {
            Ok(Command::new("pbcopy"))
        } else if cfg!(target_os = "windows") {
            Ok(Command::new("clip"))
        } else if cfg!(target_os = "linux") {
            let mut cmd = Command::new("xclip");
            cmd.args(["-selection", "clipboard"]);
            Ok(cmd)
        } else {
            Err(ClipboardError::Unsupported)
        }
    }
}

#[async_trait]
impl ClipboardAdapter for SystemClipboardAdapter {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut cmd = Self::command()?;
        cmd.stdin(std::process::Stdio::piped());
        cmd.stdout(std::process::Stdio::null());
        cmd.stderr(std::process::Stdio::null());

        let output = subprocess::run_with_timeout_with_stdin(
            cmd,
            CLIPBOARD_TIMEOUT,
            "clipboard copy",
            text.as_bytes(),
        )
        .await
        .map_err(ClipboardError::WriteFailed)?;

        if !output.status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "clipboard utility exited with {:?}",
                output.status.code()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
