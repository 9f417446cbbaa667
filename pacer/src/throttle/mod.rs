// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttling of callbacks.
//!
//! The throttled callback runs at most once per cooldown window:
//! - When a call arrives and no fire happened yet, or strictly more than
//!   `delay` elapsed since the last fire:
//!   - Invoke the callback immediately with the call's arguments
//!   - Record the fire time
//! - Otherwise:
//!   - Drop the call (it is never queued or replayed)
//!
//! There is no trailing fire.
//!
//! # Example
//!
//! ```rust
//! use pacer::{throttle, ThrottleExt};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn main() -> pacer::Result<()> {
//! let clicks = Arc::new(AtomicU32::new(0));
//! let counter = clicks.clone();
//! let on_click = throttle(
//!     move |_: ()| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     },
//!     Duration::from_secs(60),
//! )?;
//!
//! on_click.call(());
//! on_click.call(()); // inside the window: dropped
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//!
//! let on_scroll = (|offset: u32| println!("{offset}")).throttled(Duration::from_millis(16))?;
//! on_scroll.call(3);
//! # Ok(())
//! # }
//! ```

mod implementation;

pub use implementation::Throttled;

use crate::delay::delay_from_millis;
use crate::DefaultRuntime;
use core::time::Duration;
use pacer_error::Result;
use pacer_runtime::runtime::Runtime;

/// Wraps `callback` so it fires at most once per `delay`, on the default runtime's clock.
///
/// # Errors
/// Returns [`PacerError::InvalidArgument`](pacer_error::PacerError::InvalidArgument)
/// if `delay` exceeds [`MAX_DELAY`](crate::delay::MAX_DELAY).
pub fn throttle<F, A>(callback: F, delay: Duration) -> Result<Throttled<F, A>>
where
    F: Fn(A),
{
    throttle_with_runtime::<DefaultRuntime, F, A>(callback, delay)
}

/// Like [`throttle`], reading time from runtime `R`.
///
/// # Errors
/// Same as [`throttle`].
pub fn throttle_with_runtime<R, F, A>(callback: F, delay: Duration) -> Result<Throttled<F, A, R>>
where
    R: Runtime,
    F: Fn(A),
{
    Throttled::new(callback, delay)
}

/// Like [`throttle`], with the delay given in (possibly fractional) milliseconds.
///
/// # Errors
/// Returns [`PacerError::InvalidArgument`](pacer_error::PacerError::InvalidArgument)
/// for a negative, NaN, infinite or too large `delay_ms`.
pub fn throttle_millis<F, A>(callback: F, delay_ms: f64) -> Result<Throttled<F, A>>
where
    F: Fn(A),
{
    throttle(callback, delay_from_millis(delay_ms)?)
}

/// Extension trait providing the `throttled` wrapper for callbacks.
pub trait ThrottleExt<A>: Fn(A) + Sized {
    /// Wraps `self` with leading-edge throttling on the default runtime.
    ///
    /// # Errors
    /// Same as [`throttle`].
    fn throttled(self, delay: Duration) -> Result<Throttled<Self, A>>;
}

impl<F, A> ThrottleExt<A> for F
where
    F: Fn(A),
{
    fn throttled(self, delay: Duration) -> Result<Throttled<Self, A>> {
        throttle(self, delay)
    }
}
