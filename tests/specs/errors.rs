//! CLI error handling specs (§4.8).

use crate::prelude::Scratch;

#[test]
fn no_command_given_exits_with_usage_error() {
    let scratch = Scratch::new();
    let output = scratch.cmd().output().unwrap();
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no command given"), "stderr was: {stderr}");
}

#[test]
fn checkout_unknown_shell_exits_nonzero() {
    let scratch = Scratch::new();
    let output = scratch
        .cmd()
        .args(["--checkout-remote-shell", "does-not-exist"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
