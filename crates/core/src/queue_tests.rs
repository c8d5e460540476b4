// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn req(id: &str) -> WindowRequest {
    WindowRequest::new(RequestId::new(id), 100, 1, 10.0)
}

#[test]
fn default_state_is_empty() {
    let state = QueueState::default();
    assert!(state.window_queue.is_empty());
    assert_eq!(state.completed_windows_count, 0);
    assert!(state.head().is_none());
}

#[test]
fn head_is_none_when_first_entry_is_waiting() {
    let mut state = QueueState::default();
    state.push_tail(req("a"));
    assert!(state.head().is_none());
}

#[test]
fn head_returns_active_first_entry() {
    let mut state = QueueState::default();
    let mut r = req("a");
    r.status = RequestStatus::Active;
    state.push_tail(r);
    assert_eq!(state.head().unwrap().id, RequestId::new("a"));
}

#[test]
fn waiters_skips_head() {
    let mut state = QueueState::default();
    state.push_tail(req("a"));
    state.push_tail(req("b"));
    state.push_tail(req("c"));
    let waiters: Vec<_> = state.waiters().map(|r| r.id.as_str()).collect();
    assert_eq!(waiters, vec!["b", "c"]);
}

#[test]
fn next_waiter_is_index_one() {
    let mut state = QueueState::default();
    state.push_tail(req("a"));
    state.push_tail(req("b"));
    assert_eq!(state.next_waiter().unwrap().id, RequestId::new("b"));
}

#[test]
fn next_waiter_none_when_only_head() {
    let mut state = QueueState::default();
    state.push_tail(req("a"));
    assert!(state.next_waiter().is_none());
}

#[test]
fn complete_and_progress_removes_matching_head_and_increments_counter() {
    let mut state = QueueState::default();
    state.push_tail(req("a"));
    state.push_tail(req("b"));
    let removed = state.complete_and_progress(&RequestId::new("a"));
    assert_eq!(removed.unwrap().id, RequestId::new("a"));
    assert_eq!(state.completed_windows_count, 1);
    assert_eq!(state.window_queue.len(), 1);
    assert_eq!(state.window_queue[0].id, RequestId::new("b"));
}

#[test]
fn complete_and_progress_refuses_non_head_id() {
    let mut state = QueueState::default();
    state.push_tail(req("a"));
    state.push_tail(req("b"));
    let removed = state.complete_and_progress(&RequestId::new("b"));
    assert!(removed.is_none());
    assert_eq!(state.window_queue.len(), 2);
    assert_eq!(state.completed_windows_count, 0);
}

#[test]
fn complete_and_progress_on_empty_queue_is_noop() {
    let mut state = QueueState::default();
    assert!(state.complete_and_progress(&RequestId::new("ghost")).is_none());
}

#[test]
fn position_of_finds_entry() {
    let mut state = QueueState::default();
    state.push_tail(req("a"));
    state.push_tail(req("b"));
    assert_eq!(state.position_of(&RequestId::new("b")), Some(1));
    assert_eq!(state.position_of(&RequestId::new("z")), None);
}

#[test]
fn queue_state_round_trips_through_json() {
    let mut state = QueueState::default();
    state.push_tail(req("a"));
    state.last_window_open_time = 5.0;
    let json = serde_json::to_string(&state).unwrap();
    let back: QueueState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.window_queue.len(), 1);
    assert_eq!(back.last_window_open_time, 5.0);
}
