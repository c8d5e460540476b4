// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C3: the two independent tasks that keep a window-queue slot's liveness
//! bit honest (§4.3). No shared in-memory state crosses the holder/waiter
//! role boundary — both tasks observe and mutate only the queue file, under
//! its advisory lock, per SPEC_FULL.md §9's resolution of the reference
//! implementation's shared-dict heartbeat pattern.

use std::time::Duration;

use reo_core::{RequestId, RequestStatus};
use reo_storage::QueueStore;

const HOLDER_TICK: Duration = Duration::from_millis(100);
const WAITER_TICK: Duration = Duration::from_millis(500);
const EVICTION_THRESHOLD: u32 = 2;

/// Outcome of one waiter-side checker tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerTick {
    Alive,
    Pending,
    Evicted,
    /// The caller is no longer at index 1 (promoted, or fell out of the
    /// queue entirely); the checker has nothing left to do.
    NotWaiting,
}

/// Spawn the holder-side updater (§4.3 "Holder-side updater"): every 100 ms,
/// toggle `heartbeat = true` on the head record iff it is still `id`.
/// Terminates once the head id changes or is completed.
pub fn spawn_holder_updater(store: std::sync::Arc<QueueStore>, id: RequestId) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(HOLDER_TICK).await;
            let still_head = store.with_lock(Duration::from_secs(1), |state| {
                match state.head_mut() {
                    Some(req) if req.id == id && req.status == RequestStatus::Active => {
                        req.heartbeat = true;
                        true
                    }
                    _ => false,
                }
            });
            match still_head {
                Ok(Some(true)) => continue,
                _ => return,
            }
        }
    })
}

/// Spawn the waiter-side checker (§4.3 "Waiter-side checker"). Every tick it
/// checks whether `id` currently sits at index 1 and, if so, probes the
/// head's heartbeat; at any other position the tick is a harmless no-op
/// (§4.3 step 1). The task self-terminates once `id` leaves the queue
/// entirely (evicted/completed) or is promoted to head, since neither case
/// leaves anything left for this role to check.
pub fn spawn_waiter_checker(store: std::sync::Arc<QueueStore>, id: RequestId) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(WAITER_TICK).await;
            match check_once(&store, &id) {
                Ok(_) => {}
                Err(_) => return,
            }
            match store.load(Duration::from_secs(1)) {
                Ok(Some(state)) => match state.position_of(&id) {
                    None | Some(0) => return,
                    Some(_) => continue,
                },
                _ => return,
            }
        }
    })
}

/// One checker tick, exposed standalone so tests can drive it deterministically
/// instead of waiting on real 500 ms ticks.
pub fn check_once(
    store: &QueueStore,
    id: &RequestId,
) -> Result<CheckerTick, reo_storage::StorageError> {
    let result = store.with_lock(Duration::from_secs(1), |state| {
        if state.next_waiter().map(|w| &w.id) != Some(id) {
            return CheckerTick::NotWaiting;
        }
        let head = match state.head_mut() {
            Some(h) => h,
            None => return CheckerTick::NotWaiting,
        };
        if head.heartbeat {
            head.heartbeat = false;
            head.heartbeat_failures = 0;
            return CheckerTick::Alive;
        }
        head.heartbeat_failures += 1;
        if head.heartbeat_failures >= EVICTION_THRESHOLD {
            let evicted_id = head.id.clone();
            state.complete_and_progress(&evicted_id);
            CheckerTick::Evicted
        } else {
            CheckerTick::Pending
        }
    })?;
    Ok(result.unwrap_or(CheckerTick::NotWaiting))
}

#[cfg(test)]
#[path = "heartbeat_tests.rs"]
mod tests;
