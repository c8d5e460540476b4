// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use reo_core::FakeClock;
use reo_storage::SessionStore;

use super::*;

fn store(dir: &std::path::Path) -> SessionStore {
    SessionStore::new(dir)
}

#[test]
fn create_then_list_shows_one_current_shell() {
    let dir = tempfile::tempdir().unwrap();
    let sessions = store(dir.path());
    let clock = FakeClock::new();

    create(&sessions, &clock, OutputFormat::Json).unwrap();

    let shells = sessions.list().unwrap();
    assert_eq!(shells.len(), 1);
    assert_eq!(sessions.current().unwrap().unwrap().id, shells[0].id);
}

#[test]
fn checkout_switches_the_current_shell() {
    let dir = tempfile::tempdir().unwrap();
    let sessions = store(dir.path());
    let clock = FakeClock::new();
    let now = clock.epoch_ms() as f64 / 1000.0;

    let first = sessions.create(now).unwrap();
    let second = sessions.create(now).unwrap();
    assert_eq!(sessions.current().unwrap().unwrap().id, second);

    checkout(&sessions, first.as_str(), OutputFormat::Text).unwrap();
    assert_eq!(sessions.current().unwrap().unwrap().id, first);
}

#[test]
fn checkout_unknown_shell_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let sessions = store(dir.path());
    assert!(checkout(&sessions, "does-not-exist", OutputFormat::Text).is_err());
}

#[test]
fn terminate_removes_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let sessions = store(dir.path());
    let clock = FakeClock::new();
    let now = clock.epoch_ms() as f64 / 1000.0;
    let id = sessions.create(now).unwrap();

    terminate(&sessions, id.as_str(), OutputFormat::Text).unwrap();
    assert!(sessions.list().unwrap().is_empty());
}
