// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::scheduler::TimerHandle;

/// Holds at most one outstanding timer for a wrapper.
///
/// Every armed timer carries a generation id. A callback whose id is no longer
/// the armed one was superseded or cancelled and must not act, even if the
/// host already woke it.
#[derive(Debug)]
pub(crate) struct TimerSlot<H> {
    armed: Option<(u64, H)>,
    generation: u64,
}

impl<H: TimerHandle> TimerSlot<H> {
    pub(crate) const fn new() -> Self {
        Self {
            armed: None,
            generation: 0,
        }
    }

    pub(crate) const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Id the next armed timer must carry.
    pub(crate) fn reserve(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Stores the handle for `id`, cancelling whatever was armed before.
    pub(crate) fn arm(&mut self, id: u64, handle: H) {
        self.cancel();
        self.armed = Some((id, handle));
    }

    /// Cancels the armed timer, if any. Returns whether one was armed.
    pub(crate) fn cancel(&mut self) -> bool {
        match self.armed.take() {
            Some((id, handle)) => {
                crate::logging::log_trace!("cancelling timer {}", id);
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Disarms the slot if `id` is the armed timer. Called from the timer's
    /// own callback, so the handle is dropped rather than cancelled.
    pub(crate) fn claim(&mut self, id: u64) -> bool {
        match &self.armed {
            Some((armed, _)) if *armed == id => {
                self.armed = None;
                true
            }
            _ => {
                crate::logging::log_trace!("ignoring stale timer {}", id);
                false
            }
        }
    }
}
