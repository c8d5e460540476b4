// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_epoch_ms_is_plausible() {
    let clock = SystemClock;
    let ms = clock.epoch_ms();
    // Any timestamp after 2020-01-01 in epoch millis.
    assert!(ms > 1_577_836_800_000);
}

#[test]
fn fake_clock_starts_at_fixed_epoch() {
    let clock = FakeClock::new();
    assert_eq!(clock.epoch_ms(), 1_000_000);
}

#[test]
fn fake_clock_advance_moves_both_now_and_epoch() {
    let clock = FakeClock::new();
    let before = clock.now();
    clock.advance(Duration::from_millis(500));
    assert_eq!(clock.epoch_ms(), 1_000_500);
    assert!(clock.now() >= before + Duration::from_millis(500));
}

#[test]
fn fake_clock_is_cheaply_cloneable_and_shares_state() {
    let clock = FakeClock::new();
    let clone = clock.clone();
    clock.advance(Duration::from_secs(5));
    assert_eq!(clone.epoch_ms(), clock.epoch_ms());
}

#[test]
fn set_epoch_ms_overrides_directly() {
    let clock = FakeClock::new();
    clock.set_epoch_ms(42);
    assert_eq!(clock.epoch_ms(), 42);
}
