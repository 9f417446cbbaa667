// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::{future::Future, sync::Arc, time::Duration};

use crate::{
    runtime::{Runtime, Spawner},
    timer::Timer,
};
use pacer_error::{PacerError, Result};

#[derive(Debug)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    type Mutex<T: ?Sized + Send> = Arc<parking_lot::Mutex<T>>;
    type Timer = TokioTimer;
    type Instant = tokio::time::Instant;
    type Spawner = TokioSpawner;

    const NAME: &'static str = "tokio";

    fn spawner() -> Result<Self::Spawner> {
        tokio::runtime::Handle::try_current()
            .map(|handle| TokioSpawner { handle })
            .map_err(|_| PacerError::runtime_unavailable(Self::NAME))
    }
}

/// Timer backed by tokio's clock, so `tokio::time::pause` applies to it.
///
/// Outside of a runtime context `now()` falls back to the system monotonic clock.
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

/// Spawns onto the tokio runtime that was current when it was created.
#[derive(Clone, Debug)]
pub struct TokioSpawner {
    handle: tokio::runtime::Handle,
}

impl Spawner for TokioSpawner {
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Detached: cancellation goes through the task's token, not the JoinHandle
        drop(self.handle.spawn(future));
    }
}
