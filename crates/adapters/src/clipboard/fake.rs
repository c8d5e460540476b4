// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake clipboard adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ClipboardAdapter, ClipboardError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded clipboard write.
#[derive(Debug, Clone)]
pub struct ClipboardCall {
    pub text: String,
}

struct FakeClipboardState {
    calls: Vec<ClipboardCall>,
}

/// Fake clipboard adapter for testing.
#[derive(Clone)]
pub struct FakeClipboardAdapter {
    inner: Arc<Mutex<FakeClipboardState>>,
}

impl Default for FakeClipboardAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeClipboardState { calls: Vec::new() })),
        }
    }
}

impl FakeClipboardAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded clipboard writes.
    pub fn calls(&self) -> Vec<ClipboardCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl ClipboardAdapter for FakeClipboardAdapter {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.inner.lock().calls.push(ClipboardCall {
            text: text.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
