// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C5: the persistent remote-shell session registry (§4.5).

use std::path::{Path, PathBuf};
use std::time::Duration;

use reo_core::session::SessionRegistryState;
use reo_core::{Shell, ShellId};
use uuid::Uuid;

use crate::atomic::write_atomic;
use crate::error::StorageError;
use crate::lockfile::{AdvisoryLock, LockOutcome};

/// Default timeout for session-registry mutations. Sessions are rarely
/// contended (at most a handful of local tools touch the registry at once),
/// so this reuses the queue's mutation timeout rather than defining a new one.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("unknown remote shell session: {0}")]
    Unknown(String),
    #[error("timed out acquiring the session registry lock")]
    LockTimeout,
}

pub struct SessionStore {
    state_path: PathBuf,
    lock: AdvisoryLock,
}

impl SessionStore {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        let state_dir = state_dir.as_ref();
        Self {
            state_path: state_dir.join("shells.json"),
            lock: AdvisoryLock::new(state_dir.join("shells.lock")),
        }
    }

    fn with_lock<T>(
        &self,
        f: impl FnOnce(&mut SessionRegistryState) -> Result<T, SessionStoreError>,
    ) -> Result<T, SessionStoreError> {
        let guard = match self.lock.acquire(SESSION_TIMEOUT).map_err(StorageError::from)? {
            LockOutcome::Acquired(g) => g,
            LockOutcome::TimedOut => return Err(SessionStoreError::LockTimeout),
        };
        let mut state = self.load_unlocked()?;
        let result = f(&mut state)?;
        self.save_unlocked(&state)?;
        drop(guard);
        Ok(result)
    }

    pub fn create(&self, now: f64) -> Result<ShellId, SessionStoreError> {
        self.with_lock(|state| {
            let id = ShellId::new(Uuid::new_v4().to_string());
            state.shells.insert(id.clone(), Shell::new(id.clone(), now));
            state.current = Some(id.clone());
            Ok(id)
        })
    }

    pub fn list(&self) -> Result<Vec<Shell>, SessionStoreError> {
        self.with_lock(|state| {
            let mut shells: Vec<Shell> = state.shells.values().cloned().collect();
            shells.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
            Ok(shells)
        })
    }

    pub fn current(&self) -> Result<Option<Shell>, SessionStoreError> {
        self.with_lock(|state| {
            Ok(state
                .current
                .as_ref()
                .and_then(|id| state.shells.get(id).cloned()))
        })
    }

    pub fn checkout(&self, id: &ShellId) -> Result<(), SessionStoreError> {
        self.with_lock(|state| {
            if !state.shells.contains_key(id) {
                return Err(SessionStoreError::Unknown(id.as_str().to_string()));
            }
            state.current = Some(id.clone());
            Ok(())
        })
    }

    pub fn terminate(&self, id: &ShellId) -> Result<(), SessionStoreError> {
        self.with_lock(|state| {
            if state.shells.remove(id).is_none() {
                return Err(SessionStoreError::Unknown(id.as_str().to_string()));
            }
            if state.current.as_ref() == Some(id) {
                state.current = None;
            }
            Ok(())
        })
    }

    pub fn update_cwd(
        &self,
        id: &ShellId,
        new_remote_path: &str,
        now: f64,
    ) -> Result<(), SessionStoreError> {
        self.with_lock(|state| {
            let shell = state
                .shells
                .get_mut(id)
                .ok_or_else(|| SessionStoreError::Unknown(id.as_str().to_string()))?;
            shell.cwd = new_remote_path.to_string();
            shell.last_used_at = now;
            Ok(())
        })
    }

    pub fn update_env(
        &self,
        id: &ShellId,
        key: &str,
        value: &str,
        now: f64,
    ) -> Result<(), SessionStoreError> {
        self.with_lock(|state| {
            let shell = state
                .shells
                .get_mut(id)
                .ok_or_else(|| SessionStoreError::Unknown(id.as_str().to_string()))?;
            shell.env.insert(key.to_string(), value.to_string());
            shell.last_used_at = now;
            Ok(())
        })
    }

    pub fn set_venv(
        &self,
        id: &ShellId,
        name: Option<&str>,
        now: f64,
    ) -> Result<(), SessionStoreError> {
        self.with_lock(|state| {
            let shell = state
                .shells
                .get_mut(id)
                .ok_or_else(|| SessionStoreError::Unknown(id.as_str().to_string()))?;
            shell.active_venv = name.map(|s| s.to_string());
            shell.last_used_at = now;
            Ok(())
        })
    }

    fn load_unlocked(&self) -> Result<SessionRegistryState, SessionStoreError> {
        match std::fs::read(&self.state_path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(state) => Ok(state),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        path = %self.state_path.display(),
                        "session registry file is corrupt, resetting to empty state"
                    );
                    Ok(SessionRegistryState::default())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(SessionRegistryState::default())
            }
            Err(e) => Err(SessionStoreError::Storage(e.into())),
        }
    }

    fn save_unlocked(&self, state: &SessionRegistryState) -> Result<(), SessionStoreError> {
        let bytes = serde_json::to_vec_pretty(state).map_err(|e| {
            SessionStoreError::Storage(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                e,
            )))
        })?;
        write_atomic(&self.state_path, &bytes)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_store_tests.rs"]
mod tests;
