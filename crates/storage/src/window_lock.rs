// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-level window-creation lock (§4.4 step 1, §9.1 PID-cookie
//! resolution).
//!
//! Grounded in `crates/daemon/src/lifecycle/mod.rs::startup_inner`'s
//! PID-file idiom (`try_lock_exclusive` + a written-out `pid`), generalized
//! from a daemon-lifetime-held lock into an acquire/release guard: only one
//! `reo` invocation may be mid-way through opening a window for a given
//! orchestrator at a time, and a crashed holder's stale lock must be
//! reclaimable without waiting for an OS-level flock release (which only
//! happens on process exit anyway — the cookie lets us detect staleness
//! from file contents, not flock state, because flock already guarantees
//! exclusivity between live holders).

use std::path::{Path, PathBuf};
use std::time::Duration;

use reo_core::is_process_alive;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::lockfile::{AdvisoryLock, LockGuard, LockOutcome};

/// Extra window given to a stale-looking holder before we give up and report
/// it as genuinely contended. Covers the case where the state directory sits
/// on a network-mounted drive and the kernel's `flock` release lags the
/// crashed holder's exit by a beat.
const STALE_RETRY_TIMEOUT: Duration = Duration::from_millis(500);

/// Contents of the window-lock file: who holds it and a per-process cookie
/// minted once at CLI startup, used to recognize a crashed holder's stale
/// lock record independent of OS-level flock state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WindowLockRecord {
    pid: u32,
    cookie: u64,
}

/// Outcome of a window-lock acquisition attempt.
pub enum WindowLockOutcome {
    Acquired(WindowLockGuard),
    /// Another live process holds the lock.
    Held { pid: u32, cookie: u64 },
    TimedOut,
}

/// Guards exclusive access to the window-creation step across CLI
/// invocations sharing the same state directory.
pub struct WindowLock {
    record_path: PathBuf,
    lock: AdvisoryLock,
}

impl WindowLock {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        let state_dir = state_dir.as_ref();
        Self {
            record_path: state_dir.join("window.pid"),
            lock: AdvisoryLock::new(state_dir.join("window.lock")),
        }
    }

    /// Acquire the lock, recording `pid`/`cookie` as the current holder.
    ///
    /// Because the underlying `AdvisoryLock` is an OS-level flock, a crashed
    /// holder's lock is normally released by the kernel the moment its
    /// process dies. On a network-mounted state directory that release can
    /// lag, so a contended acquisition cross-checks the record's `pid` via
    /// `kill(pid, 0)` (§4.4 step 1): a dead holder gets one short extra
    /// attempt to reclaim the lock before we report it as genuinely held.
    /// The `cookie` travels alongside `pid` so a reused PID from an
    /// unrelated process is never mistaken for a live orchestrator holder
    /// (§9.1).
    pub fn acquire(
        &self,
        pid: u32,
        cookie: u64,
        timeout: Duration,
    ) -> Result<WindowLockOutcome, StorageError> {
        match self.lock.acquire(timeout)? {
            LockOutcome::Acquired(guard) => {
                self.write_record(pid, cookie)?;
                Ok(WindowLockOutcome::Acquired(WindowLockGuard { _guard: guard }))
            }
            LockOutcome::TimedOut => match self.current_holder() {
                Some(record) if is_process_alive(record.pid) => Ok(WindowLockOutcome::Held {
                    pid: record.pid,
                    cookie: record.cookie,
                }),
                Some(record) => match self.lock.acquire(STALE_RETRY_TIMEOUT)? {
                    LockOutcome::Acquired(guard) => {
                        self.write_record(pid, cookie)?;
                        Ok(WindowLockOutcome::Acquired(WindowLockGuard { _guard: guard }))
                    }
                    LockOutcome::TimedOut => Ok(WindowLockOutcome::Held {
                        pid: record.pid,
                        cookie: record.cookie,
                    }),
                },
                None => Ok(WindowLockOutcome::TimedOut),
            },
        }
    }

    fn write_record(&self, pid: u32, cookie: u64) -> Result<(), StorageError> {
        let record = WindowLockRecord { pid, cookie };
        let bytes = serde_json::to_vec(&record)
            .map_err(|e| StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        crate::atomic::write_atomic(&self.record_path, &bytes)
    }

    fn current_holder(&self) -> Option<WindowLockRecord> {
        let bytes = std::fs::read(&self.record_path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// An acquired window lock. Released automatically on drop.
pub struct WindowLockGuard {
    _guard: LockGuard,
}

#[cfg(test)]
#[path = "window_lock_tests.rs"]
mod tests;
