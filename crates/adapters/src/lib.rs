// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: notifications, clipboard, PID liveness, and
//! the window subprocess itself.

pub mod clipboard;
pub mod notify;
pub mod subprocess;
pub mod window;

pub use clipboard::{
    ClipboardAdapter, ClipboardError, NoOpClipboardAdapter, SystemClipboardAdapter,
};
pub use notify::{DesktopNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter};
/// Re-exported so call sites that already depend on `reo-adapters` for the
/// window/notify/clipboard adapters don't need a separate `reo-core`
/// import just for this one liveness check.
pub use reo_core::is_process_alive;
pub use window::child_registry::kill_tracked_windows;
pub use window::{NoOpWindowAdapter, ProcessWindowAdapter, WindowAdapter, WindowAdapterError};

#[cfg(any(test, feature = "test-support"))]
pub use clipboard::{ClipboardCall, FakeClipboardAdapter};
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use window::FakeWindowAdapter;
