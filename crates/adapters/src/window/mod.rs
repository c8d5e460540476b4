// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Window subprocess adapter (C4): writes a `WindowDescriptor`, spawns
//! `reo-window`, and parses its single JSON stdout line into a
//! `RequestWindowOutcome`.

pub mod child_registry;
mod process;

pub use process::ProcessWindowAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeWindowAdapter;

use async_trait::async_trait;
use reo_core::WindowDescriptor;
use thiserror::Error;

/// Errors from spawning or communicating with the window subprocess.
#[derive(Debug, Error)]
pub enum WindowAdapterError {
    #[error("failed to write window descriptor: {0}")]
    DescriptorWrite(String),
    #[error("failed to spawn reo-window: {0}")]
    Spawn(String),
    #[error("reo-window produced no output line")]
    NoOutput,
    #[error("failed to parse reo-window output: {0}")]
    Parse(String),
}

/// No-op window adapter: immediately reports success without spawning
/// anything. Used where a window interaction is configured off.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpWindowAdapter;

impl NoOpWindowAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WindowAdapter for NoOpWindowAdapter {
    async fn request_window(
        &self,
        _descriptor: &WindowDescriptor,
    ) -> Result<reo_core::RequestWindowOutcome, WindowAdapterError> {
        Ok(reo_core::RequestWindowOutcome::success())
    }
}

/// Adapter for running the interactive window step of a remote request.
#[async_trait]
pub trait WindowAdapter: Clone + Send + Sync + 'static {
    async fn request_window(
        &self,
        descriptor: &WindowDescriptor,
    ) -> Result<reo_core::RequestWindowOutcome, WindowAdapterError>;
}
