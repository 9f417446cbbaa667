// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::delay::validate_delay;
use crate::DefaultRuntime;
use core::fmt::{self, Debug};
use core::time::Duration;
use futures::future::{select, Either};
use futures::pin_mut;
use pacer_error::Result;
use pacer_runtime::mutex::MutexLike;
use pacer_runtime::runtime::Runtime;
use pacer_runtime::timer::Timer;
use pacer_runtime::{CancellationToken, PacerTask};
use std::sync::{Arc, Weak};

/// A callback wrapped with trailing-edge debouncing.
///
/// Every call cancels the pending deferred invocation, if any, and schedules a
/// new one `delay` later carrying the call's arguments. The callback therefore
/// fires once per burst, after the burst has been quiet for `delay`, with the
/// arguments of the burst's last call.
///
/// Deferred invocations run on a task of runtime `R`. Clones share the same
/// pending slot; dropping the last clone cancels the pending invocation.
pub struct Debounced<F, A, R = DefaultRuntime>
where
    R: Runtime,
    A: Send,
{
    shared: Arc<Shared<F, A, R>>,
}

struct Shared<F, A, R>
where
    R: Runtime,
    A: Send,
{
    callback: F,
    delay: Duration,
    timer: R::Timer,
    spawner: R::Spawner,
    pending: R::Mutex<Option<PendingCall<A>>>,
}

/// A scheduled invocation: the arguments to deliver and the task that will deliver them.
struct PendingCall<A> {
    args: A,
    // Dropping the task cancels it
    _task: PacerTask,
}

impl<F, A, R> Debounced<F, A, R>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
    R: Runtime,
{
    pub(crate) fn new(callback: F, delay: Duration) -> Result<Self> {
        let delay = validate_delay(delay)?;
        let spawner = R::spawner()?;

        Ok(Self {
            shared: Arc::new(Shared {
                callback,
                delay,
                timer: R::Timer::default(),
                spawner,
                pending: MutexLike::new(None),
            }),
        })
    }

    /// Schedules the callback to run with `args` once `delay` passes without
    /// another call, discarding any invocation scheduled by an earlier call.
    pub fn call(&self, args: A) {
        let shared = &self.shared;
        let delay = shared.delay;
        let timer = shared.timer.clone();
        let weak = Arc::downgrade(shared);

        let mut pending = shared.pending.lock();
        if pending.take().is_some() {
            trace!("debounce superseded pending call");
        }

        let task = PacerTask::spawn(&shared.spawner, move |cancel| async move {
            // Measured on the runtime's clock, which the calling thread may not share
            let sleep = timer.sleep_future(delay);
            let cancelled = cancel.cancelled();
            pin_mut!(sleep, cancelled);

            if let Either::Right(_) = select(sleep, cancelled).await {
                return;
            }
            if let Some(shared) = Weak::upgrade(&weak) {
                shared.fire_if_current(&cancel);
            }
        });

        *pending = Some(PendingCall { args, _task: task });
        debug!("debounce scheduled call in {:?}", shared.delay);
    }

    /// Discards the pending invocation. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let cancelled = self.shared.pending.lock().take().is_some();
        if cancelled {
            debug!("debounce cancelled pending call");
        }
        cancelled
    }

    /// Runs the pending invocation now, on the calling thread, instead of
    /// waiting for the quiet period. Returns whether anything was pending.
    pub fn flush(&self) -> bool {
        let Some(args) = self.take_pending() else {
            return false;
        };
        debug!("debounce flushed pending call");
        (self.shared.callback)(args);
        true
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.shared.pending.lock().is_some()
    }

    /// The quiet period.
    pub fn delay(&self) -> Duration {
        self.shared.delay
    }

    fn take_pending(&self) -> Option<A> {
        self.shared.pending.lock().take().map(|call| call.args)
    }
}

impl<F, A, R> Shared<F, A, R>
where
    F: Fn(A),
    A: Send,
    R: Runtime,
{
    /// Called by the deferred task once its sleep elapsed.
    ///
    /// The token is checked under the lock: a superseding call cancels the
    /// previous token while holding the same lock, so a stale task never takes
    /// the newer arguments.
    fn fire_if_current(&self, token: &CancellationToken) {
        let args = {
            let mut pending = self.pending.lock();
            if token.is_cancelled() {
                return;
            }
            pending.take().map(|call| call.args)
        };

        if let Some(args) = args {
            debug!("debounce fired after {:?} of quiet", self.delay);
            (self.callback)(args);
        }
    }
}

impl<F, A, R> Clone for Debounced<F, A, R>
where
    R: Runtime,
    A: Send,
{
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<F, A, R> Debug for Debounced<F, A, R>
where
    R: Runtime,
    A: Send,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.shared.delay)
            .field("runtime", &R::NAME)
            .field("pending", &self.shared.pending.lock().is_some())
            .finish_non_exhaustive()
    }
}
