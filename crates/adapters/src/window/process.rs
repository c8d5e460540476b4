// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real window adapter: writes the descriptor file, spawns the `reo-window`
//! binary, and parses its single JSON stdout line.

use super::{WindowAdapter, WindowAdapterError};
use crate::subprocess::WINDOW_SPAWN_TIMEOUT;
use async_trait::async_trait;
use reo_core::{RequestWindowOutcome, WindowDescriptor};
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;

/// Spawns the `reo-window` child binary to run the C4 window cycle.
#[derive(Clone, Debug)]
pub struct ProcessWindowAdapter {
    /// Path to the `reo-window` executable.
    binary_path: PathBuf,
    /// Directory the descriptor file is written into (one file per request).
    descriptor_dir: PathBuf,
}

impl ProcessWindowAdapter {
    pub fn new(binary_path: PathBuf, descriptor_dir: PathBuf) -> Self {
        Self {
            binary_path,
            descriptor_dir,
        }
    }

    fn descriptor_path(&self, descriptor: &WindowDescriptor) -> PathBuf {
        self.descriptor_dir
            .join(format!("window-{}.json", descriptor.request_id))
    }
}

#[async_trait]
impl WindowAdapter for ProcessWindowAdapter {
    async fn request_window(
        &self,
        descriptor: &WindowDescriptor,
    ) -> Result<RequestWindowOutcome, WindowAdapterError> {
        if let Some(parent) = self.descriptor_dir.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| WindowAdapterError::DescriptorWrite(e.to_string()))?;
        }
        tokio::fs::create_dir_all(&self.descriptor_dir)
            .await
            .map_err(|e| WindowAdapterError::DescriptorWrite(e.to_string()))?;

        let path = self.descriptor_path(descriptor);
        let json = serde_json::to_vec_pretty(descriptor)
            .map_err(|e| WindowAdapterError::DescriptorWrite(e.to_string()))?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| WindowAdapterError::DescriptorWrite(e.to_string()))?;

        let mut cmd = Command::new(&self.binary_path);
        cmd.arg(&path);
        // New process group so an emergency cleanup can force-kill this
        // child (and anything it spawns) as a unit, independent of the
        // orchestrator's own job-control group (§4.4 step 4).
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.as_std_mut().process_group(0);
        }
        // If the overall timeout below fires, drop the in-flight child
        // rather than let it run unsupervised (§4.4 step 7).
        cmd.kill_on_drop(true);

        // Total budget: the spawn overhead plus the descriptor's own
        // interaction timeout, since reo-window blocks for up to timeout_ms
        // before reporting `timeout` itself.
        let total_timeout =
            WINDOW_SPAWN_TIMEOUT + Duration::from_millis(descriptor.timeout_ms);

        let child = cmd
            .spawn()
            .map_err(|e| WindowAdapterError::Spawn(e.to_string()))?;
        let child_pid = child.id();
        if let Some(child_pid) = child_pid {
            super::child_registry::track(child_pid);
        }

        let output = tokio::time::timeout(total_timeout, child.wait_with_output()).await;

        if let Some(child_pid) = child_pid {
            super::child_registry::untrack(child_pid);
        }

        let output = output
            .map_err(|_| WindowAdapterError::Spawn("reo-window did not exit in time".into()))?
            .map_err(|e| WindowAdapterError::Spawn(e.to_string()))?;

        let _ = tokio::fs::remove_file(&path).await;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout
            .lines()
            .next_back()
            .ok_or(WindowAdapterError::NoOutput)?;

        serde_json::from_str(line).map_err(|e| WindowAdapterError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
