// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! reo-storage: on-disk persistence for the queue and session registry,
//! guarded by OS-level advisory locks (§C2, §C5).

mod atomic;
mod error;
mod lockfile;
mod queue_store;
mod session_store;
mod window_lock;

pub use atomic::write_atomic;
pub use error::StorageError;
pub use lockfile::{AdvisoryLock, LockGuard, LockOutcome};
pub use queue_store::QueueStore;
pub use session_store::SessionStore;
pub use window_lock::{WindowLock, WindowLockOutcome};
