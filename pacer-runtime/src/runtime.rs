// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{mutex::MutexLike, scheduler::Scheduler, timer::Timer};
use core::cmp::Ord;
use core::default::Default;
use core::fmt::Debug;
use core::marker::{Copy, Send, Sync};
use core::ops::Sub;
use core::time::Duration;

/// Everything a combinator needs from its host, bundled as associated types.
pub trait Runtime: 'static {
    type Mutex<T: Send + 'static>: MutexLike<T> + Send + Sync + 'static;
    type Timer: Timer<Instant = Self::Instant> + Default;
    type Scheduler: Scheduler + Default;
    type Instant: Copy
        + Ord
        + Send
        + Sync
        + Debug
        + 'static
        + Sub<Self::Instant, Output = Duration>;
}
