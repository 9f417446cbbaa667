// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::delay::validate_delay;
use crate::DefaultRuntime;
use core::fmt::{self, Debug};
use core::marker::PhantomData;
use core::time::Duration;
use pacer_error::Result;
use pacer_runtime::mutex::MutexLike;
use pacer_runtime::runtime::Runtime;
use pacer_runtime::timer::Timer;

type Instant<R> = <<R as Runtime>::Timer as Timer>::Instant;

/// A callback wrapped with leading-edge throttling.
///
/// The first call fires the callback synchronously. Every call that arrives
/// while `now - last_fire <= delay` is dropped; the first call strictly after
/// the window fires again and restarts the window from its own fire time.
///
/// Calls are safe from any thread. The check-then-set on the fire timestamp is
/// done under a lock; the callback runs after the lock is released, so it may
/// call back into the same wrapper.
pub struct Throttled<F, A, R = DefaultRuntime>
where
    R: Runtime,
{
    callback: F,
    delay: Duration,
    timer: R::Timer,
    last_fire: R::Mutex<Option<Instant<R>>>,
    _args: PhantomData<fn(A)>,
}

impl<F, A, R> Throttled<F, A, R>
where
    F: Fn(A),
    R: Runtime,
{
    pub(crate) fn new(callback: F, delay: Duration) -> Result<Self> {
        let delay = validate_delay(delay)?;

        Ok(Self {
            callback,
            delay,
            timer: R::Timer::default(),
            last_fire: MutexLike::new(None),
            _args: PhantomData,
        })
    }

    /// Invokes the callback with `args` unless the cooldown window is open.
    ///
    /// A suppressed call has no side effect at all.
    pub fn call(&self, args: A) {
        if !self.try_acquire() {
            return;
        }
        (self.callback)(args);
    }

    /// The cooldown window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn try_acquire(&self) -> bool {
        let mut last_fire = self.last_fire.lock();
        let now = self.timer.now();

        if let Some(previous) = *last_fire {
            let elapsed = now - previous;
            // Strict: a call exactly `delay` after the last fire is still suppressed
            if elapsed <= self.delay {
                trace!(
                    "throttle suppressed call: {:?} elapsed of {:?}",
                    elapsed,
                    self.delay
                );
                return false;
            }
        }

        *last_fire = Some(now);
        debug!("throttle fired at {:?}", now);
        true
    }
}

impl<F, A, R> Debug for Throttled<F, A, R>
where
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("delay", &self.delay)
            .field("runtime", &R::NAME)
            .finish_non_exhaustive()
    }
}
