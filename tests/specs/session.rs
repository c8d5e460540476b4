//! Remote-shell session management specs (§4.5, §8 invariant 7:
//! `create → list → checkout → terminate` returns the registry to its
//! initial size).

use crate::prelude::Scratch;

#[test]
fn create_list_checkout_terminate_round_trips() {
    let scratch = Scratch::new();

    let before: serde_json::Value = serde_json::from_slice(
        &scratch
            .cmd()
            .args(["--list-remote-shell", "-o", "json"])
            .output()
            .unwrap()
            .stdout,
    )
    .unwrap();
    assert_eq!(before.as_array().unwrap().len(), 0);

    let created = scratch
        .cmd()
        .args(["--create-remote-shell", "-o", "json"])
        .output()
        .unwrap();
    assert!(created.status.success());
    let created: serde_json::Value = serde_json::from_slice(&created.stdout).unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let listed: serde_json::Value = serde_json::from_slice(
        &scratch
            .cmd()
            .args(["--list-remote-shell", "-o", "json"])
            .output()
            .unwrap()
            .stdout,
    )
    .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let checkout = scratch
        .cmd()
        .args(["--checkout-remote-shell", &id])
        .output()
        .unwrap();
    assert!(checkout.status.success());

    let terminate = scratch
        .cmd()
        .args(["--terminate-remote-shell", &id])
        .output()
        .unwrap();
    assert!(terminate.status.success());

    let after: serde_json::Value = serde_json::from_slice(
        &scratch
            .cmd()
            .args(["--list-remote-shell", "-o", "json"])
            .output()
            .unwrap()
            .stdout,
    )
    .unwrap();
    assert_eq!(after.as_array().unwrap().len(), before.as_array().unwrap().len());
}

#[test]
fn list_with_no_shells_prints_a_friendly_message() {
    let scratch = Scratch::new();
    let output = scratch.cmd().args(["--list-remote-shell"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No remote shells"), "stdout was: {stdout}");
}
