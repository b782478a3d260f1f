// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the pacer combinators.
//!
//! A combinator needs exactly two things from its host: a clock and a way to
//! run a callback later, with the option of taking that back. [`timer::Timer`]
//! covers the first, [`scheduler::Scheduler`] the second, and
//! [`runtime::Runtime`] bundles them together with a lock type.

pub mod impls;
pub mod mutex;
pub mod runtime;
pub mod scheduler;
pub mod timer;
