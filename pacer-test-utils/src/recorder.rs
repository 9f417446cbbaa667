// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout, Instant};

/// One invocation observed by a [`CallRecorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded<A> {
    pub args: A,
    pub at: Instant,
}

/// Records every invocation of the callbacks it hands out.
///
/// Calls are kept in order for synchronous inspection and are also pushed to
/// a channel so async tests can wait for deferred invocations.
#[derive(Clone, Debug)]
pub struct CallRecorder<A> {
    calls: Arc<Mutex<Vec<Recorded<A>>>>,
    tx: Sender<Recorded<A>>,
    rx: Receiver<Recorded<A>>,
}

impl<A> CallRecorder<A>
where
    A: Clone + Send + 'static,
{
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            tx,
            rx,
        }
    }

    /// A callback that records its argument together with the current instant.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static {
        let calls = self.calls.clone();
        let tx = self.tx.clone();

        move |args: A| {
            let record = Recorded {
                args,
                at: Instant::now(),
            };
            calls.lock().push(record.clone());
            // The receiver lives as long as the recorder; a closed channel only
            // means the test already finished.
            let _ = tx.try_send(record);
        }
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Arguments of all recorded calls, oldest first.
    pub fn args(&self) -> Vec<A> {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    pub fn calls(&self) -> Vec<Recorded<A>> {
        self.calls.lock().clone()
    }

    /// Waits up to `timeout_ms` for the next call not yet received through this method.
    pub async fn recv_timeout(&self, timeout_ms: u64) -> Option<Recorded<A>> {
        timeout(Duration::from_millis(timeout_ms), self.rx.recv())
            .await
            .ok()
            .and_then(Result::ok)
    }

    /// Panics if a call is received within `timeout_ms`.
    pub async fn assert_no_call(&self, timeout_ms: u64)
    where
        A: std::fmt::Debug,
    {
        if let Some(call) = self.recv_timeout(timeout_ms).await {
            panic!("Unexpected call {call:?}, expected no invocation within {timeout_ms}ms");
        }
    }
}

impl<A> Default for CallRecorder<A>
where
    A: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
