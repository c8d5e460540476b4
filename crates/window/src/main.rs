// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reo-window`: the small child binary spawned by the Window Manager (§4.4,
//! §4.4.1). Reads a `WindowDescriptor` JSON file, prompts the user on a
//! terminal, and writes exactly one `RequestWindowOutcome` JSON line to
//! stdout before exiting.
//!
//! Everything user-facing goes to stderr; stdout carries only the final
//! result line, matching the wire contract the orchestrator parses.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reo_adapters::{is_process_alive, ClipboardAdapter, DesktopNotifyAdapter, NotifyAdapter, SystemClipboardAdapter};
use reo_core::{RequestWindowOutcome, WindowAction, WindowDescriptor};
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() {
    let outcome = match run().await {
        Ok(outcome) => outcome,
        Err(message) => RequestWindowOutcome::error(message),
    };

    let line = serde_json::to_string(&outcome)
        .unwrap_or_else(|_| r#"{"action":"error","message":"failed to serialize outcome"}"#.into());
    println!("{line}");
}

async fn run() -> Result<RequestWindowOutcome, String> {
    let descriptor_path = std::env::args()
        .nth(1)
        .ok_or_else(|| "usage: reo-window <descriptor-path>".to_string())?;

    let bytes = tokio::fs::read(&descriptor_path)
        .await
        .map_err(|e| format!("failed to read descriptor: {e}"))?;
    let descriptor: WindowDescriptor =
        serde_json::from_slice(&bytes).map_err(|e| format!("invalid descriptor: {e}"))?;

    let command_bytes = STANDARD
        .decode(&descriptor.command_b64)
        .map_err(|e| format!("invalid command encoding: {e}"))?;
    let command_text = String::from_utf8_lossy(&command_bytes).into_owned();

    eprintln!("== {} ==", descriptor.title);
    eprintln!("{command_text}");
    eprintln!("[Enter] confirm    [q / Ctrl-D] handled out-of-band");

    let clipboard = SystemClipboardAdapter::new();
    if let Err(e) = clipboard.set_text(&command_text).await {
        tracing::warn!(error = %e, "clipboard write failed, continuing without it");
    }

    notify_cue(&descriptor.title, &command_text);

    Ok(wait_for_outcome(&descriptor).await)
}

/// Races stdin confirmation, the orchestrator-pid liveness poll, and the
/// overall timeout deadline (§4.4.1).
async fn wait_for_outcome(descriptor: &WindowDescriptor) -> RequestWindowOutcome {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let deadline = tokio::time::sleep(Duration::from_millis(descriptor.timeout_ms));
    tokio::pin!(deadline);
    let mut parent_check = tokio::time::interval(Duration::from_secs(1));
    parent_check.tick().await; // first tick fires immediately; consume it

    loop {
        tokio::select! {
            line = lines.next_line() => {
                return outcome_for_stdin_line(line);
            }
            _ = &mut deadline => {
                return RequestWindowOutcome {
                    action: WindowAction::Timeout,
                    message: None,
                };
            }
            _ = parent_check.tick() => {
                if !is_process_alive(descriptor.orchestrator_pid) {
                    return RequestWindowOutcome {
                        action: WindowAction::ParentKilled,
                        message: None,
                    };
                }
            }
        }
    }
}

/// Maps one line (or EOF/error) off stdin to the outcome it implies: Enter
/// confirms, `q` or EOF hands the command off out-of-band, anything else
/// also confirms (the prompt only distinguishes "not q/EOF" from those two).
fn outcome_for_stdin_line(line: std::io::Result<Option<String>>) -> RequestWindowOutcome {
    match line {
        Ok(Some(text)) if text.trim().eq_ignore_ascii_case("q") => RequestWindowOutcome {
            action: WindowAction::DirectFeedback,
            message: None,
        },
        Ok(Some(_)) => RequestWindowOutcome::success(),
        Ok(None) => RequestWindowOutcome {
            action: WindowAction::DirectFeedback,
            message: Some("stdin closed".into()),
        },
        Err(e) => RequestWindowOutcome::error(format!("stdin read failed: {e}")),
    }
}

/// Best-effort desktop notification on first render; failures are silently
/// dropped (§4.4 "Observable side effects", §4.4.1 audio/visual cue).
fn notify_cue(title: &str, command_text: &str) {
    let title = title.to_string();
    let body = command_text.to_string();
    tokio::spawn(async move {
        let adapter = DesktopNotifyAdapter::new();
        if let Err(e) = adapter.notify(&title, &body).await {
            tracing::warn!(error = %e, "notification failed, continuing without it");
        }
    });
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
