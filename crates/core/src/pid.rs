// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! PID liveness and forceful termination, used to detect a crashed lock
//! holder (§4.4 step 1, §9.1 PID-cookie resolution), a vanished orchestrator
//! parent (§4.4.1), and to implement emergency window cleanup (§4.4
//! "Emergency cleanup").
//!
//! No file in the teacher crate performs this check; the `nix` dependency is
//! borrowed from the sibling pack repo `alfredjeanlab-oddjobs`, which carries
//! it for process signal handling, since `groblegark-oddjobs` has no
//! equivalent (see DESIGN.md).

/// Returns `true` if a process with the given PID is currently running.
///
/// Sends signal 0, which performs no action but still reports `ESRCH` if the
/// process does not exist — the standard `kill(pid, 0)` liveness idiom.
#[cfg(unix)]
pub fn is_process_alive(pid: u32) -> bool {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    kill(Pid::from_raw(pid as i32), None).is_ok()
}

#[cfg(not(unix))]
pub fn is_process_alive(_pid: u32) -> bool {
    // No portable liveness probe outside Unix; treat as alive so callers
    // fall back to cookie-based staleness detection instead (§9.1).
    true
}

/// Unconditionally terminate the process at `pid`. Best-effort: a process
/// that has already exited, or that this user doesn't own, is not an error.
#[cfg(unix)]
pub fn force_kill(pid: u32) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let _ = kill(Pid::from_raw(pid as i32), Signal::SIGKILL);
}

#[cfg(not(unix))]
pub fn force_kill(_pid: u32) {}

#[cfg(test)]
#[path = "pid_tests.rs"]
mod tests;
