// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use super::*;

#[test]
fn shell_collects_the_trailing_args() {
    let cli = Cli::try_parse_from(["reo", "--shell", "ls", "-la", "/tmp"]).unwrap();
    assert_eq!(
        cli.shell,
        Some(vec!["ls".to_string(), "-la".to_string(), "/tmp".to_string()])
    );
}

#[test]
fn return_flag_requires_shell() {
    let err = Cli::try_parse_from(["reo", "--return"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn output_defaults_to_text() {
    let cli = Cli::try_parse_from(["reo", "--list-remote-shell"]).unwrap();
    assert!(matches!(cli.output, OutputFormat::Text));
}

#[test]
fn output_json_is_selectable() {
    let cli = Cli::try_parse_from(["reo", "--list-remote-shell", "-o", "json"]).unwrap();
    assert!(matches!(cli.output, OutputFormat::Json));
}

#[test]
fn checkout_and_terminate_take_an_id() {
    let cli = Cli::try_parse_from(["reo", "--checkout-remote-shell", "abc"]).unwrap();
    assert_eq!(cli.checkout_remote_shell.as_deref(), Some("abc"));
}
