// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake window adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{WindowAdapter, WindowAdapterError};
use async_trait::async_trait;
use parking_lot::Mutex;
use reo_core::{RequestWindowOutcome, WindowDescriptor};
use std::collections::VecDeque;
use std::sync::Arc;

struct FakeWindowState {
    descriptors: Vec<WindowDescriptor>,
    outcomes: VecDeque<Result<RequestWindowOutcome, String>>,
}

/// Fake window adapter for testing: returns queued outcomes in FIFO order,
/// defaulting to `success` once the queue is drained.
#[derive(Clone)]
pub struct FakeWindowAdapter {
    inner: Arc<Mutex<FakeWindowState>>,
}

impl Default for FakeWindowAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeWindowState {
                descriptors: Vec::new(),
                outcomes: VecDeque::new(),
            })),
        }
    }
}

impl FakeWindowAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome the next `request_window` call should return.
    pub fn push_outcome(&self, outcome: RequestWindowOutcome) {
        self.inner.lock().outcomes.push_back(Ok(outcome));
    }

    /// Queue an error the next `request_window` call should return.
    pub fn push_error(&self, message: impl Into<String>) {
        self.inner.lock().outcomes.push_back(Err(message.into()));
    }

    /// All descriptors passed to `request_window`, in call order.
    pub fn descriptors(&self) -> Vec<WindowDescriptor> {
        self.inner.lock().descriptors.clone()
    }
}

#[async_trait]
impl WindowAdapter for FakeWindowAdapter {
    async fn request_window(
        &self,
        descriptor: &WindowDescriptor,
    ) -> Result<RequestWindowOutcome, WindowAdapterError> {
        let mut state = self.inner.lock();
        state.descriptors.push(descriptor.clone());
        match state.outcomes.pop_front() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(message)) => Err(WindowAdapterError::Spawn(message)),
            None => Ok(RequestWindowOutcome::success()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
