// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized configuration: per-user paths and timeouts, resolved once at
//! startup from environment variables with `dirs`-based fallbacks (SPEC_FULL.md
//! §2.1).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a home directory; set REO_STATE_DIR explicitly")]
    NoStateDir,
}

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `queue_state.json`, `shells.json`, lock files, and
    /// the debug log.
    pub state_dir: PathBuf,
    /// Local filesystem root the cloud drive is mounted at; `~` in remote
    /// path space maps here (§4.1).
    pub mount_base: PathBuf,
    /// Directory the remote side writes `run_<request_id>.json` result
    /// files into (§4.7).
    pub remote_result_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment, honoring `state_dir_override`
    /// (the CLI's `--state-dir` flag) ahead of `REO_STATE_DIR`.
    pub fn load(state_dir_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let state_dir = state_dir_override
            .or_else(|| std::env::var("REO_STATE_DIR").ok().map(PathBuf::from))
            .or_else(|| dirs::state_dir().map(|d| d.join("reo")))
            .ok_or(ConfigError::NoStateDir)?;

        let mount_base = std::env::var("REO_MOUNT_BASE")
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir())
            .ok_or(ConfigError::NoStateDir)?;

        let remote_result_dir = std::env::var("REO_REMOTE_RESULT_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| mount_base.join(".reo/results"));

        Ok(Self {
            state_dir,
            mount_base,
            remote_result_dir,
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join("reo-cli.log")
    }

    pub fn window_binary_path(&self) -> PathBuf {
        let mut path = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("reo"));
        path.set_file_name("reo-window");
        path
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
