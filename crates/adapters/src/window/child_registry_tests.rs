// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

// The registry is a process-wide static, so these run serially to avoid
// cross-test interference.

#[test]
#[serial]
fn tracked_pid_is_removed_by_untrack() {
    track(4242);
    untrack(4242);
    assert!(registry().lock().unwrap().is_empty());
}

#[test]
#[serial]
fn kill_tracked_windows_clears_the_registry() {
    track(1);
    track(2);
    kill_tracked_windows();
    assert!(registry().lock().unwrap().is_empty());
}
