// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred callbacks with a cancel switch.

use core::fmt::Debug;
use core::time::Duration;

/// Runs a callback once after a delay.
///
/// A zero delay still defers: the callback runs on a later turn of the host's
/// task queue, never inside `schedule` itself.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    type Handle: TimerHandle;

    /// Schedules `callback` to run after `delay` and returns the handle that
    /// can take it back.
    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;
}

/// Owned handle to one scheduled callback.
pub trait TimerHandle: Send + Debug + 'static {
    /// Prevents the callback from running if it has not started yet.
    fn cancel(self);

    /// Whether the callback has run or was cancelled.
    fn is_finished(&self) -> bool;
}
