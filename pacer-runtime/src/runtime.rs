// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{mutex::MutexLike, timer::Timer};
use core::cmp::Ord;
use core::default::Default;
use core::fmt::Debug;
use core::future::Future;
use core::marker::{Copy, Send, Sync};
use core::ops::{Add, Sub};
use core::time::Duration;
use pacer_error::Result;

pub trait Runtime: 'static {
    /// Lock guarding per-wrapper state
    type Mutex<T: ?Sized + Send>: MutexLike<T> + Send + Sync;
    /// Clock and sleep source
    type Timer: Timer<Instant = Self::Instant> + Default;
    /// Monotonic instant of `Self::Timer`
    type Instant: Copy
        + Ord
        + Send
        + Sync
        + Debug
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;
    /// Detached task spawner for deferred invocations
    type Spawner: Spawner;

    /// Name used in diagnostics and errors.
    const NAME: &'static str;

    /// Returns a spawner bound to the runtime reachable from the calling context.
    ///
    /// # Errors
    /// Returns [`PacerError::RuntimeUnavailable`](pacer_error::PacerError::RuntimeUnavailable)
    /// when no such runtime exists.
    fn spawner() -> Result<Self::Spawner>;
}

/// Detached task spawning.
///
/// Once obtained, a spawner can be used from any thread, including threads
/// that are not part of the runtime.
pub trait Spawner: Clone + Send + Sync + Debug + 'static {
    /// Run `future` to completion on the runtime without waiting for it
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
