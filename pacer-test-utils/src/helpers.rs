// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::advance;

const SETTLE_ROUNDS: usize = 16;

/// Yields enough times for every task that is already woken to run to
/// completion or to its next await point.
pub async fn settle() {
    for _ in 0..SETTLE_ROUNDS {
        yield_now().await;
    }
}

/// Advances a paused clock by `ms` milliseconds and lets woken timers run.
///
/// The clock moves in one jump: a timer due inside the jump runs once the
/// clock already reads the end of it. Step through deadlines to observe a
/// timer at its own due time.
///
/// # Panics
///
/// Panics if the clock is not paused, like `tokio::time::advance`.
pub async fn advance_by(ms: u64) {
    advance(Duration::from_millis(ms)).await;
    settle().await;
}
