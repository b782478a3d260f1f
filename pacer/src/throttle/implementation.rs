// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Debug};
use core::time::Duration;

use pacer_runtime::mutex::MutexLike;
use pacer_runtime::runtime::Runtime;
use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::timer::Timer;

use crate::logging::{log_debug, log_warn};
use crate::options::ThrottleOptions;
use crate::slot::TimerSlot;

type InstantOf<RT> = <RT as Runtime>::Instant;
type HandleOf<RT> = <<RT as Runtime>::Scheduler as Scheduler>::Handle;

/// A throttled wrapper around a target function.
///
/// Built by [`throttle`](crate::throttle()), [`ThrottleExt`](crate::ThrottleExt)
/// or one of the constructors below. Clones share the same target and state.
pub struct Throttle<F, A, R, RT>
where
    F: Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
    RT: Runtime,
{
    target: RT::Mutex<F>,
    state: RT::Mutex<ThrottleState<A, R, InstantOf<RT>, HandleOf<RT>>>,
    timer: RT::Timer,
    scheduler: RT::Scheduler,
    wait: Duration,
    options: ThrottleOptions,
}

struct ThrottleState<A, R, I, H> {
    pending_args: Option<A>,
    last_invocation: Option<I>,
    last_result: Option<R>,
    slot: TimerSlot<H>,
}

impl<F, A, R, RT> Throttle<F, A, R, RT>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
    RT: Runtime,
{
    /// Builds a wrapper on the runtime's default timer and scheduler.
    ///
    /// # Panics
    ///
    /// Panics if the runtime's default scheduler cannot be built here, e.g.
    /// Tokio outside of a runtime context.
    pub fn new(target: F, wait: Duration, options: ThrottleOptions) -> Self {
        Self::with_runtime(
            target,
            wait,
            options,
            RT::Timer::default(),
            RT::Scheduler::default(),
        )
    }

    /// Builds a wrapper on an explicit timer and scheduler.
    pub fn with_runtime(
        target: F,
        wait: Duration,
        options: ThrottleOptions,
        timer: RT::Timer,
        scheduler: RT::Scheduler,
    ) -> Self {
        if options.is_inert() {
            log_warn!("throttle built with both edges disabled, target will never run");
        }

        Self {
            target: MutexLike::new(target),
            state: MutexLike::new(ThrottleState {
                pending_args: None,
                last_invocation: None,
                last_result: None,
                slot: TimerSlot::new(),
            }),
            timer,
            scheduler,
            wait,
            options,
        }
    }

    /// Calls the wrapper.
    ///
    /// Runs the target right away when the window since its last execution
    /// has closed. Otherwise the arguments become the pending ones for the
    /// trailing execution, replacing whatever was pending.
    ///
    /// Returns the result of the most recent actual execution, which is stale
    /// for suppressed calls and `None` before the target has run at all.
    ///
    /// # Panics
    ///
    /// A panic in the target during an immediate execution propagates to the
    /// caller.
    pub fn call(&self, args: A) -> Option<R> {
        if self.options.is_inert() {
            return None;
        }

        let now = self.timer.now();
        let mut state = self.state.lock();
        state.pending_args = Some(args);

        let last_invocation = state.last_invocation;
        let baseline = match last_invocation {
            Some(at) => Some(at),
            None if !self.options.leading => {
                state.last_invocation = Some(now);
                Some(now)
            }
            None => None,
        };
        let remaining = baseline.map_or(Duration::ZERO, |at| {
            self.wait.saturating_sub(now.max(at) - at)
        });

        if remaining.is_zero() {
            state.slot.cancel();
            state.last_invocation = Some(now);
            let args = state.pending_args.take()?;
            drop(state);

            return Some(self.invoke(args));
        }

        if self.options.trailing && !state.slot.is_armed() {
            let id = state.slot.reserve();
            let this = self.clone();
            let handle = self.scheduler.schedule(remaining, move || this.fire(id));
            state.slot.arm(id, handle);
        }

        state.last_result.clone()
    }

    /// Result of the most recent actual execution.
    #[must_use]
    pub fn last_result(&self) -> Option<R> {
        self.state.lock().last_result.clone()
    }

    /// Whether a trailing execution is currently scheduled.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.state.lock().slot.is_armed()
    }

    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    #[must_use]
    pub const fn options(&self) -> ThrottleOptions {
        self.options
    }

    fn fire(&self, id: u64) {
        let mut state = self.state.lock();
        if !state.slot.claim(id) {
            return;
        }

        // Without a leading edge the next idle call starts a fresh window.
        state.last_invocation = if self.options.leading {
            Some(self.timer.now())
        } else {
            None
        };
        let Some(args) = state.pending_args.take() else {
            return;
        };
        drop(state);

        log_debug!("throttle trailing execution after {:?}", self.wait);
        self.invoke(args);
    }

    fn invoke(&self, args: A) -> R {
        let mut target = self.target.lock();
        let result = (&mut *target)(args);
        // Cached under the target lock so it always comes from the latest execution.
        self.state.lock().last_result = Some(result.clone());
        result
    }
}

impl<F, A, R, RT> Clone for Throttle<F, A, R, RT>
where
    F: Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
    RT: Runtime,
{
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            state: self.state.clone(),
            timer: self.timer.clone(),
            scheduler: self.scheduler.clone(),
            wait: self.wait,
            options: self.options,
        }
    }
}

impl<F, A, R, RT> Debug for Throttle<F, A, R, RT>
where
    F: Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
    RT: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("options", &self.options)
            .field("scheduled", &self.state.lock().slot.is_armed())
            .finish_non_exhaustive()
    }
}
