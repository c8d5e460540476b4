// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C2: the on-disk queue store (§4.2).
//!
//! `QueueStore` is the sole owner of the `queue_state.lock` file handle and
//! the sole writer of `queue_state.json` (§9.1 lock-discipline resolution) —
//! every public method acquires the advisory lock for the duration of the
//! operation and releases it before returning, including on error paths, via
//! [`LockGuard`]'s `Drop`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reo_core::{QueueState, RequestId, WindowRequest};

use crate::atomic::write_atomic;
use crate::error::StorageError;
use crate::lockfile::{AdvisoryLock, LockOutcome, MUTATION_TIMEOUT};

pub struct QueueStore {
    state_path: PathBuf,
    lock: AdvisoryLock,
}

impl QueueStore {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        let state_dir = state_dir.as_ref();
        Self {
            state_path: state_dir.join("queue_state.json"),
            lock: AdvisoryLock::new(state_dir.join("queue_state.lock")),
        }
    }

    /// Run `f` with the advisory lock held, loading state before and saving
    /// the (possibly mutated) state after. Returns `None` on lock timeout.
    pub fn with_lock<T>(
        &self,
        timeout: Duration,
        f: impl FnOnce(&mut QueueState) -> T,
    ) -> Result<Option<T>, StorageError> {
        let guard = match self.lock.acquire(timeout)? {
            LockOutcome::Acquired(g) => g,
            LockOutcome::TimedOut => return Ok(None),
        };
        let mut state = self.load_unlocked()?;
        let result = f(&mut state);
        self.save_unlocked(&state)?;
        drop(guard);
        Ok(Some(result))
    }

    /// Load the current state under the lock (read-only convenience path).
    pub fn load(&self, timeout: Duration) -> Result<Option<QueueState>, StorageError> {
        let guard = match self.lock.acquire(timeout)? {
            LockOutcome::Acquired(g) => g,
            LockOutcome::TimedOut => return Ok(None),
        };
        let state = self.load_unlocked()?;
        drop(guard);
        Ok(Some(state))
    }

    /// Enqueue a new request at the tail. Returns `false` on lock timeout.
    pub fn push_tail(&self, request: WindowRequest) -> Result<bool, StorageError> {
        let result = self.with_lock(crate::lockfile::ENQUEUE_TIMEOUT, |state| {
            state.push_tail(request);
        })?;
        Ok(result.is_some())
    }

    /// Remove the head entry iff it matches `id` (§9.1 unification point for
    /// every completion path: normal exit, timeout, eviction).
    pub fn complete_and_progress(
        &self,
        id: &RequestId,
    ) -> Result<Option<WindowRequest>, StorageError> {
        let result = self.with_lock(MUTATION_TIMEOUT, |state| state.complete_and_progress(id))?;
        Ok(result.flatten())
    }

    fn load_unlocked(&self) -> Result<QueueState, StorageError> {
        match std::fs::read(&self.state_path) {
            Ok(bytes) => match serde_json::from_slice::<QueueState>(&bytes) {
                Ok(state) => Ok(state),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        path = %self.state_path.display(),
                        "queue state file is corrupt, resetting to empty state"
                    );
                    Ok(QueueState::default())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(QueueState::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save_unlocked(&self, state: &QueueState) -> Result<(), StorageError> {
        let mut state = state.clone();
        state.last_update = now_epoch_secs();
        let bytes = serde_json::to_vec_pretty(&state)
            .map_err(|e| StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        write_atomic(&self.state_path, &bytes)
    }
}

fn now_epoch_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

#[cfg(test)]
#[path = "queue_store_tests.rs"]
mod tests;
