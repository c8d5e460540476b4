// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C4: the Window Manager facade that turns `request_window(title, command,
//! timeout)` into the seven-step algorithm of §4.4 — cross-process lock,
//! enqueue, wait-for-head, spawn, monitor, collect, cleanup.

use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reo_adapters::WindowAdapter;
use reo_core::{Clock, RequestId, RequestStatus, WindowAction, WindowDescriptor, WindowRequest};
use reo_storage::{QueueStore, WindowLock, WindowLockOutcome};

use crate::heartbeat;

/// Minimum gap between two activations (§I2/§8 invariant 2).
const MIN_SPACING_SECS: f64 = 5.0;
/// How often the wait loop re-checks the queue while waiting for the slot.
const POLL_INTERVAL: Duration = Duration::from_millis(200);
/// Timeout for the cross-process window-creation lock (§4.4 step 1).
const WINDOW_LOCK_TIMEOUT: Duration = Duration::from_secs(10);
/// Extra grace the parent grants the child beyond the caller's own timeout
/// (§4.4 step 6).
const COLLECT_GRACE: Duration = Duration::from_secs(10);

/// The outcome of one `request_window` call, orthogonal to any particular
/// caller's error-reporting convention (the Dispatcher maps this onto
/// [`reo_core::CoreError`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowOutcome {
    Success,
    DirectFeedback(Option<String>),
    Timeout,
    ParentKilled,
    SlotTimeout,
    Evicted,
    WindowError(String),
}

pub struct WindowManager<W, C> {
    queue: Arc<QueueStore>,
    window_lock: Arc<WindowLock>,
    adapter: W,
    clock: C,
    orchestrator_pid: u32,
    cookie: u64,
}

impl<W, C> WindowManager<W, C>
where
    W: WindowAdapter,
    C: Clock,
{
    pub fn new(
        queue: Arc<QueueStore>,
        window_lock: Arc<WindowLock>,
        adapter: W,
        clock: C,
        orchestrator_pid: u32,
        cookie: u64,
    ) -> Self {
        Self {
            queue,
            window_lock,
            adapter,
            clock,
            orchestrator_pid,
            cookie,
        }
    }

    /// `id` is minted by the caller (the Dispatcher mints one `RequestId` per
    /// `run_remote` call and reuses it for both the queue entry and the
    /// result-file name, so the rendered remote command can reference its
    /// own result path before the window even exists).
    pub async fn request_window(
        &self,
        id: RequestId,
        title: &str,
        command_text: &str,
        timeout_seconds: u64,
    ) -> WindowOutcome {
        let guard = match self
            .window_lock
            .acquire(self.orchestrator_pid, self.cookie, WINDOW_LOCK_TIMEOUT)
        {
            Ok(WindowLockOutcome::Acquired(guard)) => guard,
            Ok(WindowLockOutcome::Held { pid, cookie }) => {
                tracing::warn!(held_by_pid = pid, held_by_cookie = cookie, "window creation lock is held");
                return WindowOutcome::SlotTimeout;
            }
            Ok(WindowLockOutcome::TimedOut) => return WindowOutcome::SlotTimeout,
            Err(e) => return WindowOutcome::WindowError(e.to_string()),
        };

        let now = self.clock.epoch_ms() as f64 / 1000.0;
        let request = WindowRequest::new(id.clone(), self.orchestrator_pid, self.cookie, now);
        match self.queue.push_tail(request) {
            Ok(true) => {}
            Ok(false) | Err(_) => return WindowOutcome::SlotTimeout,
        }

        let checker = heartbeat::spawn_waiter_checker(self.queue.clone(), id.clone());

        match self.wait_for_head(&id, timeout_seconds).await {
            Ok(()) => {}
            Err(outcome) => {
                checker.abort();
                let _ = self.queue.complete_and_progress(&id);
                return outcome;
            }
        }
        checker.abort();

        let holder = heartbeat::spawn_holder_updater(self.queue.clone(), id.clone());

        let descriptor = WindowDescriptor {
            request_id: id.clone(),
            title: title.to_string(),
            command_b64: STANDARD.encode(command_text.as_bytes()),
            timeout_ms: timeout_seconds * 1000,
            orchestrator_pid: self.orchestrator_pid,
        };

        let total_timeout = Duration::from_secs(timeout_seconds) + COLLECT_GRACE;
        let result = tokio::time::timeout(total_timeout, self.adapter.request_window(&descriptor))
            .await;

        holder.abort();
        let _ = self.queue.complete_and_progress(&id);
        drop(guard);

        match result {
            Ok(Ok(outcome)) => match outcome.action {
                WindowAction::Success => WindowOutcome::Success,
                WindowAction::DirectFeedback => WindowOutcome::DirectFeedback(outcome.message),
                WindowAction::Timeout => WindowOutcome::Timeout,
                WindowAction::ParentKilled => WindowOutcome::ParentKilled,
                WindowAction::Error => {
                    WindowOutcome::WindowError(outcome.message.unwrap_or_default())
                }
            },
            Ok(Err(e)) => WindowOutcome::WindowError(e.to_string()),
            Err(_elapsed) => WindowOutcome::Timeout,
        }
    }

    /// Poll the queue until `id` becomes the active head, is evicted, or the
    /// caller's own timeout elapses (§4.4 step 3). Performs the promotion
    /// itself, gated by the minimum-spacing invariant (§I2).
    async fn wait_for_head(&self, id: &RequestId, timeout_seconds: u64) -> Result<(), WindowOutcome> {
        let deadline = self.clock.now() + Duration::from_secs(timeout_seconds);
        loop {
            let now_epoch = self.clock.epoch_ms() as f64 / 1000.0;
            let tick = self.queue.with_lock(Duration::from_secs(5), |state| {
                match state.position_of(id) {
                    None => WaitTick::Evicted,
                    Some(0) => {
                        if state.window_queue[0].status == RequestStatus::Active {
                            WaitTick::Promoted
                        } else {
                            let gate_open = state.last_window_open_time == 0.0
                                || now_epoch - state.last_window_open_time >= MIN_SPACING_SECS;
                            if gate_open {
                                state.last_window_open_time = now_epoch;
                                let head = &mut state.window_queue[0];
                                head.status = RequestStatus::Active;
                                head.start_time = Some(now_epoch);
                                WaitTick::Promoted
                            } else {
                                WaitTick::StillWaiting
                            }
                        }
                    }
                    Some(_) => WaitTick::StillWaiting,
                }
            });

            match tick {
                Ok(Some(WaitTick::Promoted)) => return Ok(()),
                Ok(Some(WaitTick::Evicted)) => return Err(WindowOutcome::Evicted),
                Ok(Some(WaitTick::StillWaiting)) | Ok(None) | Err(_) => {}
            }

            if self.clock.now() >= deadline {
                return Err(WindowOutcome::SlotTimeout);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

enum WaitTick {
    Promoted,
    Evicted,
    StillWaiting,
}

#[cfg(test)]
#[path = "window_manager_tests.rs"]
mod tests;
