// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the pacer wrappers.
//!
//! A [`Runtime`](runtime::Runtime) bundles the three services the wrappers need:
//! a monotonic [`Timer`](timer::Timer), a [`MutexLike`](mutex::MutexLike) lock
//! for per-wrapper state and a [`Spawner`](runtime::Spawner) for deferred calls.
//! [`PacerTask`] runs a spawned future that can be cancelled through a
//! [`CancellationToken`].

mod cancellation_token;
pub mod impls;
pub mod mutex;
pub mod runtime;
mod task;
pub mod timer;

pub use cancellation_token::{CancellationToken, Cancelled};
pub use task::PacerTask;
