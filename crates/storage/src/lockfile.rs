// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-process exclusive advisory lock on a dedicated `.lock` file (§I6).
//!
//! Grounded in `crates/daemon/src/lifecycle/mod.rs::startup_inner`'s
//! `fs2::FileExt::try_lock_exclusive()` pattern, generalized into a
//! retry-with-timeout acquisition loop (the daemon only needed a single
//! try-once acquisition at startup; the queue/session stores need to wait
//! out transient contention from sibling CLI invocations).

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use fs2::FileExt;

/// Sleep interval between retry attempts while the lock is contended.
pub const RETRY_INTERVAL: Duration = Duration::from_millis(100);

/// Default timeout for a single queue mutation (§4.2).
pub const MUTATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for enqueueing a new request (§4.2).
pub const ENQUEUE_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of an acquisition attempt.
pub enum LockOutcome {
    Acquired(LockGuard),
    TimedOut,
}

/// An exclusive lock on a dedicated file, independent of the state file it
/// protects.
pub struct AdvisoryLock {
    path: PathBuf,
}

impl AdvisoryLock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Try to acquire the lock, retrying every [`RETRY_INTERVAL`] until
    /// `timeout` elapses.
    pub fn acquire(&self, timeout: Duration) -> std::io::Result<LockOutcome> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)?;

        let deadline = Instant::now() + timeout;
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => return Ok(LockOutcome::Acquired(LockGuard { file })),
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    if Instant::now() >= deadline {
                        return Ok(LockOutcome::TimedOut);
                    }
                    thread::sleep(RETRY_INTERVAL);
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// An acquired exclusive lock. Released automatically on drop.
pub struct LockGuard {
    file: File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
#[path = "lockfile_tests.rs"]
mod tests;
