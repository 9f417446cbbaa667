// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use std::{
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};

use crate::{
    runtime::{Runtime, Spawner},
    timer::Timer,
};
use pacer_error::Result;

#[derive(Debug)]
pub struct SmolRuntime;

impl Runtime for SmolRuntime {
    type Mutex<T: ?Sized + Send> = Arc<parking_lot::Mutex<T>>;
    type Timer = SmolTimer;
    type Instant = Instant;
    type Spawner = SmolSpawner;

    const NAME: &'static str = "smol";

    /// smol's global executor is always reachable.
    fn spawner() -> Result<Self::Spawner> {
        Ok(SmolSpawner)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep(async_io::Timer::after(duration))
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}

/// `async_io::Timer` resolves to the instant it fired; the wrappers only need `()`.
#[derive(Debug)]
pub struct SmolSleep(async_io::Timer);

impl Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        Pin::new(&mut self.0).poll(cx).map(drop)
    }
}

/// Spawns detached tasks on smol's global executor.
#[derive(Clone, Debug, Default)]
pub struct SmolSpawner;

impl Spawner for SmolSpawner {
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        smol::spawn(future).detach();
    }
}
