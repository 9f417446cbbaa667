// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debouncing of callbacks.
//!
//! The debounced callback waits for a pause in the calls of at least `delay`
//! before running with the latest arguments:
//! - When a call arrives, discard any pending invocation and schedule a new
//!   one `delay` later with this call's arguments
//! - If no new call arrives before it is due, the callback runs once
//! - A steady stream of calls closer than `delay` apart never fires
//!
//! The callback is a closure, so its captured environment travels with it to
//! the deferred invocation. Only the explicit arguments vary per call.
//!
//! A pending invocation can be dropped with [`Debounced::cancel`] or run
//! early with [`Debounced::flush`].
//!
//! # Example
//!
//! ```rust
//! use pacer::debounce;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> pacer::Result<()> {
//! let search = debounce(
//!     |query: String| println!("searching for {query}"),
//!     Duration::from_millis(250),
//! )?;
//!
//! search.call("r".to_string());
//! search.call("ru".to_string());
//! search.call("rust".to_string()); // only this one is searched
//! assert!(search.is_pending());
//! # Ok(())
//! # }
//! ```

mod implementation;

pub use implementation::Debounced;

use crate::delay::delay_from_millis;
use crate::DefaultRuntime;
use core::time::Duration;
use pacer_error::Result;
use pacer_runtime::runtime::Runtime;

/// Wraps `callback` so it fires once `delay` after the last of a burst of calls,
/// on the default runtime.
///
/// # Errors
/// - [`PacerError::InvalidArgument`](pacer_error::PacerError::InvalidArgument)
///   if `delay` exceeds [`MAX_DELAY`](crate::delay::MAX_DELAY)
/// - [`PacerError::RuntimeUnavailable`](pacer_error::PacerError::RuntimeUnavailable)
///   if called outside the runtime (tokio: no current runtime handle)
pub fn debounce<F, A>(callback: F, delay: Duration) -> Result<Debounced<F, A>>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    debounce_with_runtime::<DefaultRuntime, F, A>(callback, delay)
}

/// Like [`debounce`], scheduling deferred calls on runtime `R`.
///
/// # Errors
/// Same as [`debounce`].
pub fn debounce_with_runtime<R, F, A>(callback: F, delay: Duration) -> Result<Debounced<F, A, R>>
where
    R: Runtime,
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    Debounced::new(callback, delay)
}

/// Like [`debounce`], with the delay given in (possibly fractional) milliseconds.
///
/// # Errors
/// Same as [`debounce`], plus `InvalidArgument` for a negative, NaN or
/// infinite `delay_ms`.
pub fn debounce_millis<F, A>(callback: F, delay_ms: f64) -> Result<Debounced<F, A>>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    debounce(callback, delay_from_millis(delay_ms)?)
}

/// Extension trait providing the `debounced` wrapper for callbacks.
pub trait DebounceExt<A>: Fn(A) + Send + Sync + Sized + 'static
where
    A: Send + 'static,
{
    /// Wraps `self` with trailing-edge debouncing on the default runtime.
    ///
    /// # Errors
    /// Same as [`debounce`].
    fn debounced(self, delay: Duration) -> Result<Debounced<Self, A>>;
}

impl<F, A> DebounceExt<A> for F
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    fn debounced(self, delay: Duration) -> Result<Debounced<Self, A>> {
        debounce(self, delay)
    }
}
