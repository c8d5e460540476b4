// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn noop_clipboard_returns_ok() {
    let adapter = NoOpClipboardAdapter::new();
    assert!(adapter.set_text("anything").await.is_ok());
}

#[test]
fn noop_clipboard_default() {
    let adapter = NoOpClipboardAdapter::default();
    assert!(std::mem::size_of_val(&adapter) == 0);
}
