// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A process-wide registry of in-flight `reo-window` child PIDs, consulted
//! by the orchestrator's emergency-cleanup signal handler (§4.4 "Emergency
//! cleanup").
//!
//! Grounded in the "signal handlers performing heavy cleanup" redesign flag
//! (SPEC_FULL.md §9): the handler itself only needs to reach a shared set of
//! PIDs and force-kill them; tracking/untracking happens around each
//! child's spawn/reap in [`super::process::ProcessWindowAdapter`].

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

fn registry() -> &'static Mutex<HashSet<u32>> {
    static REGISTRY: OnceLock<Mutex<HashSet<u32>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Record that `pid` is a live `reo-window` child, to be force-killed by an
/// emergency cleanup if the orchestrator is asked to shut down early.
pub fn track(pid: u32) {
    registry().lock().unwrap_or_else(|e| e.into_inner()).insert(pid);
}

/// Stop tracking `pid` once its window has been collected normally.
pub fn untrack(pid: u32) {
    registry().lock().unwrap_or_else(|e| e.into_inner()).remove(&pid);
}

/// Force-kill every currently tracked child, best-effort, clearing the
/// registry as it goes.
pub fn kill_tracked_windows() {
    let pids: Vec<u32> = registry().lock().unwrap_or_else(|e| e.into_inner()).drain().collect();
    for pid in pids {
        reo_core::force_kill(pid);
    }
}

#[cfg(test)]
#[path = "child_registry_tests.rs"]
mod tests;
