// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug)]
struct Call<A> {
    args: A,
    /// Clock reading relative to the recorder's creation.
    at: Duration,
}

/// Records invocations of the closures it hands out.
///
/// Create it after pausing the clock so `at` offsets line up with the
/// `advance_by` steps of the test.
#[derive(Debug, Clone)]
pub struct CallRecorder<A> {
    origin: Instant,
    calls: Arc<Mutex<Vec<Call<A>>>>,
}

impl<A> Default for CallRecorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> CallRecorder<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A target that records its argument and returns the running call count.
    pub fn target(&self) -> impl FnMut(A) -> usize + Send + 'static
    where
        A: Send + 'static,
    {
        let origin = self.origin;
        let calls = Arc::clone(&self.calls);
        move |args| {
            let mut calls = calls.lock();
            calls.push(Call {
                args,
                at: Instant::now() - origin,
            });
            calls.len()
        }
    }

    /// A target that records its argument and then panics.
    pub fn panicking_target(&self, message: &'static str) -> impl FnMut(A) + Send + 'static
    where
        A: Send + 'static,
    {
        let mut record = self.target();
        move |args| {
            record(args);
            panic!("{message}");
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn args(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    /// Offsets, in milliseconds, at which the target ran.
    #[must_use]
    pub fn times_ms(&self) -> Vec<u128> {
        self.calls
            .lock()
            .iter()
            .map(|call| call.at.as_millis())
            .collect()
    }
}
