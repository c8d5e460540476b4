// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use reo_adapters::FakeWindowAdapter;
use reo_core::FakeClock;
use reo_storage::WindowLock;

use super::*;

fn manager(
    dir: &std::path::Path,
    clock: FakeClock,
    adapter: FakeWindowAdapter,
    pid: u32,
) -> WindowManager<FakeWindowAdapter, FakeClock> {
    WindowManager::new(
        Arc::new(QueueStore::new(dir)),
        Arc::new(WindowLock::new(dir)),
        adapter,
        clock,
        pid,
        pid as u64,
    )
}

#[tokio::test]
async fn uncontended_request_succeeds_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = FakeWindowAdapter::new();
    let manager = manager(dir.path(), FakeClock::new(), adapter, 111);

    let outcome = manager
        .request_window(RequestId::new("req-1"), "title", "echo hi", 10)
        .await;
    assert_eq!(outcome, WindowOutcome::Success);
}

#[tokio::test]
async fn second_caller_waits_out_the_minimum_spacing_gate() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FakeClock::new();

    let first = manager(dir.path(), clock.clone(), FakeWindowAdapter::new(), 1);
    let outcome = first
        .request_window(RequestId::new("req-1"), "t1", "echo a", 10)
        .await;
    assert_eq!(outcome, WindowOutcome::Success);

    // Advance only 1s — well under the 5s gate — before the second caller
    // enqueues, then let a driver task open the gate shortly after.
    clock.advance(Duration::from_millis(1_000));

    let driver_clock = clock.clone();
    let driver = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        driver_clock.advance(Duration::from_secs(6));
    });

    let second = manager(dir.path(), clock.clone(), FakeWindowAdapter::new(), 2);
    let outcome = second
        .request_window(RequestId::new("req-2"), "t2", "echo b", 30)
        .await;
    driver.await.unwrap();

    assert_eq!(outcome, WindowOutcome::Success);
}

#[tokio::test]
async fn window_error_from_the_adapter_surfaces_as_window_error() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = FakeWindowAdapter::new();
    adapter.push_error("exploded");
    let manager = manager(dir.path(), FakeClock::new(), adapter, 1);

    let outcome = manager
        .request_window(RequestId::new("req-3"), "t", "boom", 10)
        .await;
    assert_eq!(
        outcome,
        WindowOutcome::WindowError("failed to spawn reo-window: exploded".into())
    );
}
