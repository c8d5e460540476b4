// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;

/// Determine if color output should be enabled.
///
/// Delegates to [`crate::color::should_colorize`] — the single source of truth
/// for color detection across the CLI.
pub fn should_use_color() -> bool {
    crate::color::should_colorize()
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format a wall-clock timestamp (epoch seconds) as elapsed-since-now
/// (e.g. `"5s"`, `"2m"`, `"1h30m"`).
pub fn format_time_ago(epoch_secs: f64, now_epoch_secs: f64) -> String {
    let elapsed = (now_epoch_secs - epoch_secs).max(0.0) as u64;
    reo_core::time_fmt::format_elapsed(elapsed)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
