// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce: run a target only after calls have paused for `wait`.
//!
//! Trailing mode (the default):
//! - Every call restarts the quiet period and replaces the pending arguments
//! - When the period ends the target runs once, with the latest arguments
//!
//! Immediate mode:
//! - The first call of a burst runs the target synchronously
//! - Later calls only restart the quiet period; nothing runs when it ends
//!
//! The target's return value is discarded.
//!
//! # Example
//!
//! ```rust
//! use pacer::DebounceExt;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let searches = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&searches);
//! let search = (move |_query: String| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! })
//! .debounce(Duration::from_millis(20));
//!
//! for query in ["r", "ru", "rus", "rust"] {
//!     search.call(query.to_string());
//! }
//! assert_eq!(searches.load(Ordering::SeqCst), 0);
//!
//! tokio::time::sleep(Duration::from_millis(50)).await;
//! assert_eq!(searches.load(Ordering::SeqCst), 1);
//! # }
//! ```

mod implementation;

pub use implementation::Debounce;

#[cfg(feature = "runtime-tokio")]
use core::time::Duration;

#[cfg(feature = "runtime-tokio")]
use crate::options::DebounceOptions;
#[cfg(feature = "runtime-tokio")]
use crate::DefaultRuntime;
#[cfg(feature = "runtime-tokio")]
use pacer_error::Result;
#[cfg(feature = "runtime-tokio")]
use pacer_runtime::impls::tokio::TokioScheduler;

/// Wraps `target` so it runs once calls have paused for `wait`, or on the
/// leading call of each burst when `immediate` is set.
///
/// # Panics
///
/// Panics when called outside of a Tokio runtime. See [`Debounce::try_new`].
#[cfg(feature = "runtime-tokio")]
pub fn debounce<F, A, R>(
    target: F,
    wait: Duration,
    immediate: bool,
) -> Debounce<F, A, R, DefaultRuntime>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: 'static,
{
    Debounce::new(target, wait, DebounceOptions::from(immediate))
}

#[cfg(feature = "runtime-tokio")]
impl<F, A, R> Debounce<F, A, R, DefaultRuntime>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: 'static,
{
    /// Like [`debounce`], without panicking outside of a runtime.
    ///
    /// # Errors
    ///
    /// Returns [`pacer_error::PacerError::NoRuntime`] when called outside of a
    /// Tokio runtime.
    pub fn try_new(target: F, wait: Duration, options: DebounceOptions) -> Result<Self> {
        let scheduler = TokioScheduler::try_current()?;
        Ok(Self::with_runtime(target, wait, options, scheduler))
    }
}

/// Extension trait turning any suitable closure into a [`Debounce`].
#[cfg(feature = "runtime-tokio")]
pub trait DebounceExt<A, R>: FnMut(A) -> R + Send + Sized + 'static
where
    A: Send + 'static,
    R: 'static,
{
    /// Debounces in trailing mode.
    fn debounce(self, wait: Duration) -> Debounce<Self, A, R, DefaultRuntime>;

    /// Debounces in immediate mode.
    fn debounce_immediate(self, wait: Duration) -> Debounce<Self, A, R, DefaultRuntime>;
}

#[cfg(feature = "runtime-tokio")]
impl<F, A, R> DebounceExt<A, R> for F
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: 'static,
{
    fn debounce(self, wait: Duration) -> Debounce<Self, A, R, DefaultRuntime> {
        Debounce::new(self, wait, DebounceOptions::new())
    }

    fn debounce_immediate(self, wait: Duration) -> Debounce<Self, A, R, DefaultRuntime> {
        Debounce::new(self, wait, DebounceOptions::new().with_immediate(true))
    }
}
