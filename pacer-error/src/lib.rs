// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::doc_markdown)]
//! Error types for the pacer rate-limiting combinators
//!
//! The combinators themselves never fail at call time: a wrapped target runs
//! or it doesn't, and panics inside the target unwind to whoever drove it.
//! Errors only show up at the edges, when a wrapper is built without a
//! scheduler host or when options are parsed from text.
//!
//! # Examples
//!
//! ```
//! use pacer_error::{PacerError, Result};
//!
//! fn parse_edges(raw: &str) -> Result<()> {
//!     Err(PacerError::invalid_options(format!("unknown edge `{raw}`")))
//! }
//!
//! assert!(parse_edges("middle").is_err());
//! ```

/// Root error type for all pacer operations
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    /// No scheduler host is available
    ///
    /// Returned when a wrapper is built outside of the runtime that is
    /// supposed to run its deferred executions.
    #[error("No runtime available: {context}")]
    NoRuntime {
        /// What the runtime lookup reported
        context: String,
    },

    /// Options could not be built from their textual form
    #[error("Invalid options: {context}")]
    InvalidOptions {
        /// Description of the offending input
        context: String,
    },
}

impl PacerError {
    /// Create a missing runtime error with the given context
    pub fn no_runtime(context: impl Into<String>) -> Self {
        Self::NoRuntime {
            context: context.into(),
        }
    }

    /// Create an invalid options error with the given context
    pub fn invalid_options(context: impl Into<String>) -> Self {
        Self::InvalidOptions {
            context: context.into(),
        }
    }

    /// Check if this error goes away once the caller runs inside a runtime
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoRuntime { .. })
    }
}

/// Specialized Result type for pacer operations
///
/// ```
/// use pacer_error::Result;
///
/// fn wait_ms() -> Result<u64> {
///     Ok(100)
/// }
/// ```
pub type Result<T> = std::result::Result<T, PacerError>;
