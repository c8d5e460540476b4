// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clipboard adapters.

mod noop;
mod system;

pub use noop::NoOpClipboardAdapter;
pub use system::SystemClipboardAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ClipboardCall, FakeClipboardAdapter};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
    #[error("no clipboard utility found for this platform")]
    Unsupported,
}

/// Adapter for writing text to the system clipboard (§4.4 step 2: the
/// orchestrator copies the command text before the user is prompted).
#[async_trait]
pub trait ClipboardAdapter: Clone + Send + Sync + 'static {
    /// Replace the clipboard contents with `text`.
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}
