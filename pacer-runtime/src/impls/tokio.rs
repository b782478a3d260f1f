// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::{sync::Arc, time::Duration};

#[cfg(feature = "runtime-tokio")]
use tokio::{runtime::Handle, task::JoinHandle};

#[cfg(feature = "runtime-tokio")]
use pacer_error::{PacerError, Result};

#[cfg(feature = "runtime-tokio")]
use crate::{
    runtime::Runtime,
    scheduler::{Scheduler, TimerHandle},
    timer::Timer,
};

#[cfg(feature = "runtime-tokio")]
pub struct TokioRuntime;

#[cfg(feature = "runtime-tokio")]
impl Runtime for TokioRuntime {
    type Mutex<T: Send + 'static> = Arc<parking_lot::Mutex<T>>;
    type Timer = TokioTimer;
    type Scheduler = TokioScheduler;
    type Instant = tokio::time::Instant;
}

/// Tokio clock. Uses `tokio::time::Instant`, so a paused runtime clock is
/// honoured by `now()` as well as by `sleep_future`.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

/// Schedules callbacks as tasks spawned on a captured runtime handle.
///
/// The handle is captured when the scheduler is built, so `schedule` may be
/// called from any thread afterwards.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
    timer: TokioTimer,
}

#[cfg(feature = "runtime-tokio")]
impl TokioScheduler {
    /// Captures the runtime the caller is running on.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime, like `tokio::spawn`.
    #[must_use]
    pub fn current() -> Self {
        Self::from_handle(Handle::current())
    }

    /// Captures the runtime the caller is running on, if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::NoRuntime`] when called outside of a Tokio runtime.
    pub fn try_current() -> Result<Self> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|e| PacerError::no_runtime(e.to_string()))
    }

    #[must_use]
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            timer: TokioTimer,
        }
    }
}

#[cfg(feature = "runtime-tokio")]
impl Default for TokioScheduler {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioScheduler {
    type Handle = TokioTimerHandle;

    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        // The deadline is fixed here rather than at first poll.
        let sleep = {
            let _entered = self.handle.enter();
            self.timer.sleep_future(delay)
        };
        TokioTimerHandle(self.handle.spawn(async move {
            sleep.await;
            callback();
        }))
    }
}

#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioTimerHandle(JoinHandle<()>);

#[cfg(feature = "runtime-tokio")]
impl TimerHandle for TokioTimerHandle {
    fn cancel(self) {
        self.0.abort();
    }

    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}
