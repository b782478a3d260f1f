// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::clone::Clone;
use core::cmp::Ord;
use core::fmt::Debug;
use core::future::Future;
use core::marker::{Copy, Send, Sync};
use core::ops::Sub;
use core::time::Duration;

/// Time source shared by the combinators and their scheduler.
///
/// `now()` must be measured on the same clock that `sleep_future` waits on,
/// otherwise the remaining-window arithmetic drifts away from actual fire times.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + 'static
        + Sub<Self::Instant, Output = Duration>;

    /// Creates a future that completes once `duration` has passed.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}
