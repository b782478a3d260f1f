// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle and debounce combinators for plain functions.
//!
//! Both combinators take a target function and hand back a wrapper that is
//! called in its place. The wrapper decides, from the clock and its own state,
//! whether the target runs now, later, or not at all. Deferred executions are
//! handed to a scheduler from the `pacer-runtime` abstraction.
//!
//! # Overview
//!
//! - **[`throttle()`] / [`Throttle`]** - at most one execution per window, on the
//!   leading and/or trailing edge
//! - **[`debounce()`] / [`Debounce`]** - one execution per burst, after the burst
//!   or on its first call
//! - **[`ThrottleExt`] / [`DebounceExt`]** - the same, as methods on closures
//! - **[`ThrottleOptions`] / [`DebounceOptions`]** - edge configuration
//!
//! Each wrapper owns at most one outstanding timer and serializes executions
//! of its target. Several arguments travel as a tuple.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioRuntime`, deferred executions are
//!   spawned tasks on the runtime the wrapper was built in
//!
//! Other hosts plug in by implementing [`pacer_runtime::runtime::Runtime`] and
//! using the `with_runtime` constructors.
//!
//! # Example
//!
//! ```rust
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let resize = throttle(
//!     |(width, height): (u32, u32)| width * height,
//!     Duration::from_millis(100),
//!     ThrottleOptions::default(),
//! );
//!
//! assert_eq!(resize.call((800, 600)), Some(480_000));
//! assert_eq!(resize.call((1024, 768)), Some(480_000));
//! # }
//! ```

mod logging;

mod debounce;
mod options;
mod slot;
mod throttle;

pub mod prelude;

pub use debounce::Debounce;
pub use options::{DebounceOptions, ThrottleOptions};
pub use pacer_error::{PacerError, Result};
pub use throttle::Throttle;

#[cfg(feature = "runtime-tokio")]
pub use debounce::{debounce, DebounceExt};
#[cfg(feature = "runtime-tokio")]
pub use throttle::{throttle, ThrottleExt};

#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = pacer_runtime::impls::tokio::TokioRuntime;
