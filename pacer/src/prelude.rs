// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the combinators and their options.
//!
//! ```ignore
//! use pacer::prelude::*;
//!
//! let save = save_document.throttle(Duration::from_millis(500));
//! let search = run_query.debounce(Duration::from_millis(250));
//! ```

pub use crate::{Debounce, DebounceOptions, Throttle, ThrottleOptions};

#[cfg(feature = "runtime-tokio")]
pub use crate::debounce::{debounce, DebounceExt};
#[cfg(feature = "runtime-tokio")]
pub use crate::throttle::{throttle, ThrottleExt};
