// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C7: reads back the JSON result file the remote side writes, tolerating
//! the cloud drive's write-propagation lag (§4.7, §8 scenario S6).

use std::path::{Path, PathBuf};
use std::time::Duration;

use reo_core::{Clock, RemoteResult, RequestId};

/// Default grace period tolerating "not yet visible on the shared
/// filesystem" before giving up (§4.7 race policy).
pub const DEFAULT_GRACE: Duration = Duration::from_secs(5);
/// How often to re-check for the file while inside the grace window.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultOutcome {
    Found(RemoteResult),
    NoResult,
    BadResult(String),
}

pub struct ResultExchange<C> {
    remote_result_dir: PathBuf,
    clock: C,
    grace: Duration,
}

impl<C: Clock> ResultExchange<C> {
    pub fn new(remote_result_dir: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            remote_result_dir: remote_result_dir.into(),
            clock,
            grace: DEFAULT_GRACE,
        }
    }

    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    pub fn result_path(&self, request_id: &RequestId) -> PathBuf {
        self.remote_result_dir
            .join(format!("run_{}.json", request_id.as_str()))
    }

    /// Wait up to `self.grace` for the result file to appear, then parse and
    /// best-effort delete it.
    pub async fn collect(&self, request_id: &RequestId) -> ResultOutcome {
        let path = self.result_path(request_id);
        let deadline = self.clock.now() + self.grace;

        loop {
            match read_result(&path) {
                Some(outcome) => {
                    let _ = std::fs::remove_file(&path);
                    return outcome;
                }
                None => {
                    if self.clock.now() >= deadline {
                        return ResultOutcome::NoResult;
                    }
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }
        }
    }
}

fn read_result(path: &Path) -> Option<ResultOutcome> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(_) => return None,
    };
    match RemoteResult::parse(&bytes) {
        Ok(result) => Some(ResultOutcome::Found(result)),
        Err(e) => {
            tracing::warn!(error = %e, bytes = ?String::from_utf8_lossy(&bytes), "result file unparseable");
            Some(ResultOutcome::BadResult(e.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "result_exchange_tests.rs"]
mod tests;
