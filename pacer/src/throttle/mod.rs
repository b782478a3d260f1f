// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle: run a target at most once per `wait` window.
//!
//! Each call records its arguments as pending, then:
//! - If the window since the last execution has closed:
//!   - Cancel any scheduled trailing execution
//!   - Run the target now and remember its result
//! - Otherwise, with the trailing edge enabled and nothing scheduled yet:
//!   - Schedule a trailing execution for when the window closes
//!   - It runs with whatever arguments are pending at that moment
//!
//! With the leading edge disabled the first call of an idle period only opens
//! the window. Every call returns the result of the most recent execution.
//!
//! # Example
//!
//! ```rust
//! use pacer::ThrottleExt;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let save = |doc: &'static str| doc.len();
//! let throttled = save.throttle(Duration::from_millis(100));
//!
//! assert_eq!(throttled.call("draft"), Some(5));
//! // Inside the window: suppressed, the previous result comes back.
//! assert_eq!(throttled.call("final draft"), Some(5));
//! assert!(throttled.is_scheduled());
//! # }
//! ```

mod implementation;

pub use implementation::Throttle;

#[cfg(feature = "runtime-tokio")]
use core::time::Duration;

#[cfg(feature = "runtime-tokio")]
use crate::options::ThrottleOptions;
#[cfg(feature = "runtime-tokio")]
use crate::DefaultRuntime;
#[cfg(feature = "runtime-tokio")]
use pacer_error::Result;
#[cfg(feature = "runtime-tokio")]
use pacer_runtime::impls::tokio::{TokioScheduler, TokioTimer};

/// Wraps `target` so it runs at most once per `wait`.
///
/// # Panics
///
/// Panics when called outside of a Tokio runtime. See [`Throttle::try_new`].
#[cfg(feature = "runtime-tokio")]
pub fn throttle<F, A, R>(
    target: F,
    wait: Duration,
    options: ThrottleOptions,
) -> Throttle<F, A, R, DefaultRuntime>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    Throttle::new(target, wait, options)
}

#[cfg(feature = "runtime-tokio")]
impl<F, A, R> Throttle<F, A, R, DefaultRuntime>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Like [`throttle`], without panicking outside of a runtime.
    ///
    /// # Errors
    ///
    /// Returns [`pacer_error::PacerError::NoRuntime`] when called outside of a
    /// Tokio runtime.
    pub fn try_new(target: F, wait: Duration, options: ThrottleOptions) -> Result<Self> {
        let scheduler = TokioScheduler::try_current()?;
        Ok(Self::with_runtime(target, wait, options, TokioTimer, scheduler))
    }
}

/// Extension trait turning any suitable closure into a [`Throttle`].
#[cfg(feature = "runtime-tokio")]
pub trait ThrottleExt<A, R>: FnMut(A) -> R + Send + Sized + 'static
where
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Throttles with both edges enabled.
    fn throttle(self, wait: Duration) -> Throttle<Self, A, R, DefaultRuntime>;

    /// Throttles with explicit edge options.
    fn throttle_with(
        self,
        wait: Duration,
        options: ThrottleOptions,
    ) -> Throttle<Self, A, R, DefaultRuntime>;
}

#[cfg(feature = "runtime-tokio")]
impl<F, A, R> ThrottleExt<A, R> for F
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    fn throttle(self, wait: Duration) -> Throttle<Self, A, R, DefaultRuntime> {
        Throttle::new(self, wait, ThrottleOptions::default())
    }

    fn throttle_with(
        self,
        wait: Duration,
        options: ThrottleOptions,
    ) -> Throttle<Self, A, R, DefaultRuntime> {
        Throttle::new(self, wait, options)
    }
}
