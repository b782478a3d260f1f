// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the pacer combinators.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CallRecorder<A>`
//!
//! A target function that remembers every invocation, its arguments and the
//! (paused) clock reading at which it happened:
//!
//! ```rust
//! use pacer_test_utils::CallRecorder;
//! use pacer_test_utils::test_data::person_alice;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let recorder = CallRecorder::new();
//! let mut target = recorder.target();
//!
//! assert_eq!(target(person_alice()), 1);
//! assert_eq!(recorder.args(), vec![person_alice()]);
//! # }
//! ```
//!
//! ## Clock helpers
//!
//! `advance_by(ms)` moves a paused Tokio clock forward in one jump and then
//! lets every task woken by the move run, so timers due within the jump have
//! fired by the time the helper returns, observing the clock at its end.
//!
//! # Module Organization
//!
//! - `recorder` - `CallRecorder<A>`
//! - `person` - `Person` fixture type
//! - `test_data` - predefined `Person` values
//! - `helpers` - clock helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod person;
pub mod recorder;
pub mod test_data;

pub use helpers::{advance_by, settle};
pub use person::Person;
pub use recorder::CallRecorder;
