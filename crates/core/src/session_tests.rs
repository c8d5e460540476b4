// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_shell_defaults_cwd_to_tilde() {
    let shell = Shell::new(ShellId::new("s1"), 10.0);
    assert_eq!(shell.cwd, "~");
    assert!(shell.env.is_empty());
    assert!(shell.active_venv.is_none());
    assert_eq!(shell.created_at, 10.0);
    assert_eq!(shell.last_used_at, 10.0);
}

#[test]
fn default_registry_is_empty_with_no_current() {
    let state = SessionRegistryState::default();
    assert!(state.current.is_none());
    assert!(state.shells.is_empty());
}

#[test]
fn registry_round_trips_through_json() {
    let mut state = SessionRegistryState::default();
    let shell = Shell::new(ShellId::new("s1"), 1.0);
    state.shells.insert(shell.id.clone(), shell);
    state.current = Some(ShellId::new("s1"));

    let json = serde_json::to_string(&state).unwrap();
    let back: SessionRegistryState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.current, Some(ShellId::new("s1")));
    assert!(back.shells.contains_key(&ShellId::new("s1")));
}
