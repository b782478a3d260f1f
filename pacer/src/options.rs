// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wrapper configuration.
//!
//! Both option types have a compact textual form, handy for configuration
//! files and command lines:
//!
//! ```
//! use pacer::{DebounceOptions, ThrottleOptions};
//!
//! let throttle: ThrottleOptions = "trailing".parse().unwrap();
//! assert!(!throttle.leading && throttle.trailing);
//!
//! let debounce: DebounceOptions = "immediate".parse().unwrap();
//! assert!(debounce.immediate);
//! ```

use core::fmt::{self, Display};
use core::str::FromStr;
use pacer_error::PacerError;

/// Which edges of a burst a throttled wrapper executes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThrottleOptions {
    /// Run the first call of an idle period immediately.
    pub leading: bool,
    /// Run the last suppressed call once the window closes.
    pub trailing: bool,
}

impl ThrottleOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }

    #[must_use]
    pub const fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub const fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    /// Neither edge enabled: the wrapper never runs its target.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        !self.leading && !self.trailing
    }
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ThrottleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.leading, self.trailing) {
            (true, true) => f.write_str("leading,trailing"),
            (true, false) => f.write_str("leading"),
            (false, true) => f.write_str("trailing"),
            (false, false) => f.write_str("none"),
        }
    }
}

/// Parses a comma separated list of edges: `leading`, `trailing`, or `none`.
impl FromStr for ThrottleOptions {
    type Err = PacerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Self {
            leading: false,
            trailing: false,
        };
        let mut seen_any = false;

        for token in s.split(',').map(str::trim) {
            match token.to_ascii_lowercase().as_str() {
                "leading" => options.leading = true,
                "trailing" => options.trailing = true,
                "none" => {}
                "" => continue,
                other => {
                    return Err(PacerError::invalid_options(format!(
                        "unknown throttle edge `{other}`"
                    )))
                }
            }
            seen_any = true;
        }

        if !seen_any {
            return Err(PacerError::invalid_options("empty throttle edge list"));
        }
        Ok(options)
    }
}

/// Whether a debounced wrapper runs on the leading call of a burst instead of
/// after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebounceOptions {
    pub immediate: bool,
}

impl DebounceOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self { immediate: false }
    }

    #[must_use]
    pub const fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }
}

impl From<bool> for DebounceOptions {
    fn from(immediate: bool) -> Self {
        Self { immediate }
    }
}

impl Display for DebounceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.immediate { "immediate" } else { "trailing" })
    }
}

/// Accepts `immediate` or `trailing`.
impl FromStr for DebounceOptions {
    type Err = PacerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self { immediate: true }),
            "trailing" => Ok(Self { immediate: false }),
            other => Err(PacerError::invalid_options(format!(
                "unknown debounce mode `{other}`"
            ))),
        }
    }
}
