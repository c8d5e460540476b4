// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn format_time_ago_renders_seconds() {
    assert_eq!(format_time_ago(100.0, 105.0), "5s");
}

#[test]
fn format_time_ago_renders_minutes() {
    assert_eq!(format_time_ago(0.0, 125.0), "2m");
}

#[test]
fn format_time_ago_clamps_future_timestamps_to_zero() {
    assert_eq!(format_time_ago(200.0, 100.0), "0s");
}
