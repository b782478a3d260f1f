// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Debug};
use core::marker::PhantomData;
use core::time::Duration;

use pacer_runtime::mutex::MutexLike;
use pacer_runtime::runtime::Runtime;
use pacer_runtime::scheduler::Scheduler;

use crate::logging::log_debug;
use crate::options::DebounceOptions;
use crate::slot::TimerSlot;

type HandleOf<RT> = <<RT as Runtime>::Scheduler as Scheduler>::Handle;

/// A debounced wrapper around a target function.
///
/// Built by [`debounce`](crate::debounce()), [`DebounceExt`](crate::DebounceExt)
/// or one of the constructors below. Clones share the same target and state.
pub struct Debounce<F, A, R, RT>
where
    F: Send + 'static,
    A: Send + 'static,
    RT: Runtime,
{
    target: RT::Mutex<F>,
    state: RT::Mutex<DebounceState<A, HandleOf<RT>>>,
    scheduler: RT::Scheduler,
    wait: Duration,
    options: DebounceOptions,
    _result: PhantomData<fn() -> R>,
}

struct DebounceState<A, H> {
    pending_args: Option<A>,
    slot: TimerSlot<H>,
}

impl<F, A, R, RT> Debounce<F, A, R, RT>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: 'static,
    RT: Runtime,
{
    /// Builds a wrapper on the runtime's default scheduler.
    ///
    /// # Panics
    ///
    /// Panics if the runtime's default scheduler cannot be built here, e.g.
    /// Tokio outside of a runtime context.
    pub fn new(target: F, wait: Duration, options: DebounceOptions) -> Self {
        Self::with_runtime(target, wait, options, RT::Scheduler::default())
    }

    /// Builds a wrapper on an explicit scheduler.
    pub fn with_runtime(
        target: F,
        wait: Duration,
        options: DebounceOptions,
        scheduler: RT::Scheduler,
    ) -> Self {
        Self {
            target: MutexLike::new(target),
            state: MutexLike::new(DebounceState {
                pending_args: None,
                slot: TimerSlot::new(),
            }),
            scheduler,
            wait,
            options,
            _result: PhantomData,
        }
    }

    /// Calls the wrapper.
    ///
    /// Restarts the quiet period. In trailing mode the target runs once the
    /// period ends, with the arguments of the latest call. In immediate mode
    /// the leading call of a burst runs the target synchronously and the rest
    /// of the burst is dropped.
    ///
    /// # Panics
    ///
    /// A panic in the target during an immediate execution propagates to the
    /// caller.
    pub fn call(&self, args: A) {
        let mut state = self.state.lock();
        let call_now = self.options.immediate && !state.slot.is_armed();

        state.slot.cancel();
        let id = state.slot.reserve();
        let this = self.clone();
        let handle = self.scheduler.schedule(self.wait, move || this.fire(id));
        state.slot.arm(id, handle);

        if !self.options.immediate {
            state.pending_args = Some(args);
            return;
        }
        drop(state);

        if call_now {
            log_debug!("debounce leading execution");
            self.invoke(args);
        }
    }

    /// Whether a quiet period is currently running.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.state.lock().slot.is_armed()
    }

    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    #[must_use]
    pub const fn options(&self) -> DebounceOptions {
        self.options
    }

    fn fire(&self, id: u64) {
        let mut state = self.state.lock();
        if !state.slot.claim(id) || self.options.immediate {
            return;
        }
        let Some(args) = state.pending_args.take() else {
            return;
        };
        drop(state);

        log_debug!("debounce trailing execution after {:?}", self.wait);
        self.invoke(args);
    }

    fn invoke(&self, args: A) {
        let mut target = self.target.lock();
        let _ = (&mut *target)(args);
    }
}

impl<F, A, R, RT> Clone for Debounce<F, A, R, RT>
where
    F: Send + 'static,
    A: Send + 'static,
    RT: Runtime,
{
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            state: self.state.clone(),
            scheduler: self.scheduler.clone(),
            wait: self.wait,
            options: self.options,
            _result: PhantomData,
        }
    }
}

impl<F, A, R, RT> Debug for Debounce<F, A, R, RT>
where
    F: Send + 'static,
    A: Send + 'static,
    RT: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("wait", &self.wait)
            .field("options", &self.options)
            .field("scheduled", &self.state.lock().slot.is_armed())
            .finish_non_exhaustive()
    }
}
