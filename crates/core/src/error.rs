// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared error kinds for the orchestrator core.
//!
//! Individual crates define their own `thiserror` enums for I/O and
//! subprocess failures; this type collects the domain-level error kinds
//! named in the error-handling table so callers can match on a stable tag
//! regardless of which component raised it.

use thiserror::Error;

/// A stable, user-facing error kind.
///
/// `kind_tag()` returns the short identifier (e.g. `"slot_timeout"`) that is
/// surfaced verbatim in `--return` JSON output.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("timed out waiting for the remote window slot")]
    SlotTimeout,

    #[error("evicted from the queue by the next waiter")]
    Evicted,

    #[error("window subprocess failed: {0}")]
    WindowError(String),

    #[error("timed out waiting for the window to complete")]
    Timeout,

    #[error("no result file was found for this request")]
    NoResult,

    #[error("result file could not be parsed: {0}")]
    BadResult(String),

    #[error("unknown remote shell session: {0}")]
    UnknownSession(String),

    #[error("path would escape the remote root: {0}")]
    ForbiddenPath(String),

    #[error("shared-drive I/O failure: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Stable short tag used in `--return` JSON output and in tests.
    pub fn kind_tag(&self) -> &'static str {
        match self {
            CoreError::SlotTimeout => "slot_timeout",
            CoreError::Evicted => "evicted",
            CoreError::WindowError(_) => "window_error",
            CoreError::Timeout => "timeout",
            CoreError::NoResult => "no_result",
            CoreError::BadResult(_) => "bad_result",
            CoreError::UnknownSession(_) => "unknown_session",
            CoreError::ForbiddenPath(_) => "forbidden_path",
            CoreError::StorageError(_) => "storage_error",
        }
    }
}
