// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op clipboard adapter.

use super::{ClipboardAdapter, ClipboardError};
use async_trait::async_trait;

/// Clipboard adapter that silently discards all writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpClipboardAdapter;

impl NoOpClipboardAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardAdapter for NoOpClipboardAdapter {
    async fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
