// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Detached tasks with cooperative cancellation.

use crate::runtime::Spawner;
use crate::CancellationToken;
use core::future::Future;

/// Handle to a spawned background task, cancelled on drop.
///
/// The spawned future receives a [`CancellationToken`] that it must observe to
/// stop early. Dropping the handle or calling [`cancel`](Self::cancel) triggers
/// the token; the task exits at its next cancellation checkpoint.
///
/// # Example
///
/// ```rust
/// use pacer_runtime::impls::tokio::TokioRuntime;
/// use pacer_runtime::runtime::Runtime;
/// use pacer_runtime::PacerTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let spawner = TokioRuntime::spawner().unwrap();
/// let task = PacerTask::spawn(&spawner, |cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct PacerTask {
    cancel: CancellationToken,
}

impl PacerTask {
    /// Spawn `f` on `spawner`, handing it the token that signals cancellation.
    pub fn spawn<S, F, Fut>(spawner: &S, f: F) -> Self
    where
        S: Spawner,
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        spawner.spawn(f(cancel.clone()));

        Self { cancel }
    }

    /// Signal the task to stop without waiting for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for PacerTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
