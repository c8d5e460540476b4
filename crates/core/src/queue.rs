// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C2 data model: the single-slot window queue (§3 `WindowRequest`/`QueueState`).

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifies one `WindowRequest` in the queue.
    pub struct RequestId;
}

/// Lifecycle state of a `WindowRequest` (§3 Lifecycles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Waiting,
    Active,
    Completed,
}

/// One entry in the window queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRequest {
    pub id: RequestId,
    pub status: RequestStatus,
    pub owner_pid: u32,
    pub owner_thread: u64,
    /// Seconds since the Unix epoch, at enqueue time.
    pub request_time: f64,
    /// Set once the request is promoted to `Active`.
    pub start_time: Option<f64>,
    /// Toggled `true` by the holder, cleared `false` by the next waiter (§C3).
    pub heartbeat: bool,
    /// Consecutive failed heartbeat observations by the next waiter (§I5).
    pub heartbeat_failures: u32,
}

impl WindowRequest {
    /// Construct a freshly-enqueued, waiting request.
    pub fn new(id: RequestId, owner_pid: u32, owner_thread: u64, request_time: f64) -> Self {
        Self {
            id,
            status: RequestStatus::Waiting,
            owner_pid,
            owner_thread,
            request_time,
            start_time: None,
            heartbeat: false,
            heartbeat_failures: 0,
        }
    }
}

/// The full on-disk queue state (§6 queue-state file format).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueState {
    pub window_queue: Vec<WindowRequest>,
    pub completed_windows_count: u64,
    pub last_window_open_time: f64,
    pub last_update: f64,
}

impl Default for QueueState {
    fn default() -> Self {
        Self {
            window_queue: Vec::new(),
            completed_windows_count: 0,
            last_window_open_time: 0.0,
            last_update: 0.0,
        }
    }
}

impl QueueState {
    /// The current holder, if `window_queue[0]` exists and is `Active` (§I1).
    pub fn head(&self) -> Option<&WindowRequest> {
        self.window_queue
            .first()
            .filter(|r| r.status == RequestStatus::Active)
    }

    /// Mutable access to the head slot regardless of its status (used by the
    /// promotion path, which transitions a waiting head into `Active`).
    pub fn head_mut(&mut self) -> Option<&mut WindowRequest> {
        self.window_queue.first_mut()
    }

    /// All requests waiting behind the head, in arrival order (§I2).
    pub fn waiters(&self) -> impl Iterator<Item = &WindowRequest> {
        self.window_queue.iter().skip(1)
    }

    /// The request at index 1, the only one permitted to check/evict the
    /// head's heartbeat (§I4).
    pub fn next_waiter(&self) -> Option<&WindowRequest> {
        self.window_queue.get(1)
    }

    pub fn position_of(&self, id: &RequestId) -> Option<usize> {
        self.window_queue.iter().position(|r| &r.id == id)
    }

    pub fn push_tail(&mut self, request: WindowRequest) {
        self.window_queue.push(request);
    }

    /// Remove the head entry if (and only if) its id matches `id`, bump the
    /// completed counter, and return it.
    ///
    /// This is the single unification point for every completion path
    /// (normal exit, timeout, eviction) named in SPEC_FULL.md §9.1 — no
    /// other code is permitted to remove the head record directly.
    pub fn complete_and_progress(&mut self, id: &RequestId) -> Option<WindowRequest> {
        if self.window_queue.first().map(|r| &r.id) != Some(id) {
            return None;
        }
        let removed = self.window_queue.remove(0);
        self.completed_windows_count += 1;
        Some(removed)
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
