// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Debug log installer: a rotating file appender plus an `EnvFilter`,
//! adjustable per-invocation by `-v`/`--verbose` (§2.1, §4.8.1).

use std::path::Path;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber, writing to `log_path` with the
/// given minimum verbosity floor.
///
/// Returns the `WorkerGuard` that must be kept alive for the duration of the
/// process — dropping it flushes the non-blocking writer.
pub fn setup(log_path: &Path, verbose: bool) -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file_name = log_path
        .file_name()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "log path has no file name"))?;
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    Ok(guard)
}
