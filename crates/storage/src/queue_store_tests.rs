// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

fn req(id: &str) -> WindowRequest {
    WindowRequest::new(RequestId::new(id), 100, 1, 10.0)
}

#[test]
fn load_on_missing_file_returns_default_state() {
    let dir = tempdir().unwrap();
    let store = QueueStore::new(dir.path());
    let state = store.load(Duration::from_secs(1)).unwrap().unwrap();
    assert!(state.window_queue.is_empty());
}

#[test]
fn load_on_corrupt_file_resets_to_default_without_erroring() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("queue_state.json"), b"{not valid json").unwrap();
    let store = QueueStore::new(dir.path());
    let state = store.load(Duration::from_secs(1)).unwrap().unwrap();
    assert!(state.window_queue.is_empty());
}

#[test]
fn load_on_empty_file_resets_to_default() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("queue_state.json"), b"").unwrap();
    let store = QueueStore::new(dir.path());
    let state = store.load(Duration::from_secs(1)).unwrap().unwrap();
    assert!(state.window_queue.is_empty());
}

#[test]
fn push_tail_persists_across_loads() {
    let dir = tempdir().unwrap();
    let store = QueueStore::new(dir.path());
    assert!(store.push_tail(req("a")).unwrap());

    let state = store.load(Duration::from_secs(1)).unwrap().unwrap();
    assert_eq!(state.window_queue.len(), 1);
    assert_eq!(state.window_queue[0].id, RequestId::new("a"));
}

#[test]
fn complete_and_progress_removes_matching_head() {
    let dir = tempdir().unwrap();
    let store = QueueStore::new(dir.path());
    store.push_tail(req("a")).unwrap();
    store.push_tail(req("b")).unwrap();

    let removed = store
        .complete_and_progress(&RequestId::new("a"))
        .unwrap()
        .unwrap();
    assert_eq!(removed.id, RequestId::new("a"));

    let state = store.load(Duration::from_secs(1)).unwrap().unwrap();
    assert_eq!(state.window_queue.len(), 1);
    assert_eq!(state.completed_windows_count, 1);
}

#[test]
fn complete_and_progress_on_non_head_is_noop() {
    let dir = tempdir().unwrap();
    let store = QueueStore::new(dir.path());
    store.push_tail(req("a")).unwrap();
    store.push_tail(req("b")).unwrap();

    let removed = store.complete_and_progress(&RequestId::new("b")).unwrap();
    assert!(removed.is_none());

    let state = store.load(Duration::from_secs(1)).unwrap().unwrap();
    assert_eq!(state.window_queue.len(), 2);
}

#[test]
fn with_lock_returns_none_when_lock_contended() {
    let dir = tempdir().unwrap();
    let store = QueueStore::new(dir.path());
    let held = crate::lockfile::AdvisoryLock::new(dir.path().join("queue_state.lock"));
    let guard = match held.acquire(Duration::from_secs(1)).unwrap() {
        crate::lockfile::LockOutcome::Acquired(g) => g,
        crate::lockfile::LockOutcome::TimedOut => panic!("expected to acquire"),
    };

    let result = store
        .with_lock(Duration::from_millis(200), |state| {
            state.push_tail(req("never"));
        })
        .unwrap();
    assert!(result.is_none());

    drop(guard);
}

#[test]
fn save_updates_last_update_timestamp() {
    let dir = tempdir().unwrap();
    let store = QueueStore::new(dir.path());
    store
        .with_lock(Duration::from_secs(1), |state| {
            state.last_window_open_time = 0.0;
        })
        .unwrap();
    let state = store.load(Duration::from_secs(1)).unwrap().unwrap();
    assert!(state.last_update > 0.0);
}
