// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn downcast_from_anyhow_recovers_the_code() {
    let err: anyhow::Error = ExitError::new(3, "evicted").into();
    let code = err.downcast_ref::<ExitError>().map_or(1, |e| e.code);
    assert_eq!(code, 3);
}

#[test]
fn display_renders_the_message_only() {
    let err = ExitError::new(2, "slot timeout");
    assert_eq!(err.to_string(), "slot timeout");
}

#[test]
fn non_exit_error_falls_back_to_one() {
    let err = anyhow::anyhow!("plain failure");
    let code = err.downcast_ref::<ExitError>().map_or(1, |e| e.code);
    assert_eq!(code, 1);
}
