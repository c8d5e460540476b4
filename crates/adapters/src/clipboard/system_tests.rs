// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn unsupported_platform_reports_unsupported() {
    // This test only asserts the branch reachable on the current platform;
    // on linux/macos/windows `command()` succeeds and this is a no-op.
    if !cfg!(any(target_os = "macos", target_os = "windows", target_os = "linux")) {
        let result = SystemClipboardAdapter::command();
        assert!(matches!(result, Err(ClipboardError::Unsupported)));
    }
}

#[tokio::test]
#[cfg(target_os = "linux")]
async fn linux_uses_xclip_with_clipboard_selection() {
    let cmd = SystemClipboardAdapter::command().unwrap();
    assert_eq!(cmd.as_std().get_program(), "xclip");
}
