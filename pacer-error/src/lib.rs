// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the pacer throttle and debounce wrappers.
//!
//! All errors are reported when a wrapper is created, never when it is called.
//! Errors raised by the wrapped callback itself are not represented here: they
//! propagate to whoever invokes the callback.
//!
//! # Examples
//!
//! ```
//! use pacer_error::{PacerError, Result};
//!
//! fn check(ms: f64) -> Result<()> {
//!     if ms < 0.0 {
//!         return Err(PacerError::invalid_argument("delay", "must not be negative"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(-1.0).is_err());
//! ```

/// Root error type for all pacer operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PacerError {
    /// An argument passed to a wrapper factory was rejected.
    ///
    /// Raised for delays that are negative, NaN, infinite or larger than the
    /// supported maximum.
    #[error("Invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: String,
        /// Why the value was rejected
        reason: String,
    },

    /// No runtime is available to schedule deferred calls.
    ///
    /// A debounce wrapper needs a task spawner. With tokio this means the
    /// wrapper must be created from within a runtime context.
    #[error("No {runtime} runtime available to schedule deferred calls")]
    RuntimeUnavailable {
        /// Name of the runtime that was looked up
        runtime: String,
    },
}

impl PacerError {
    /// Create an invalid argument error
    pub fn invalid_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a runtime unavailable error
    pub fn runtime_unavailable(runtime: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            runtime: runtime.into(),
        }
    }

    /// Check if the error was caused by the caller's arguments.
    ///
    /// Such errors are permanent: retrying with the same input fails again.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Specialized Result type for pacer operations
///
/// # Examples
///
/// ```
/// use pacer_error::Result;
///
/// fn build() -> Result<u32> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, PacerError>;
