// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::time::{advance, Instant};

/// Advances the paused clock to `start + offset_ms`.
///
/// Lets a test script calls at absolute simulated times. Panics if that
/// instant is already in the past.
pub async fn advance_to(start: Instant, offset_ms: u64) {
    let target = start + Duration::from_millis(offset_ms);
    let now = Instant::now();
    assert!(
        target >= now,
        "cannot advance backwards to t={offset_ms}ms, clock is at t={:?}",
        now - start
    );
    advance(target - now).await;
}

/// Milliseconds elapsed between `start` and `at`, as an integer.
pub fn elapsed_ms(start: Instant, at: Instant) -> u128 {
    (at - start).as_millis()
}
