// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the pacer workspace.
//!
//! Designed for tests running on tokio's paused clock
//! (`#[tokio::test(start_paused = true)]`): every recorded call carries the
//! simulated instant at which it happened, and the async helpers let the clock
//! auto-advance to the next due timer instead of sleeping for real.
//!
//! ```rust
//! use pacer_test_utils::CallRecorder;
//!
//! let recorder = CallRecorder::<u32>::new();
//! let callback = recorder.callback();
//!
//! callback(7);
//! assert_eq!(recorder.args(), vec![7]);
//! ```

pub mod helpers;
mod recorder;

pub use recorder::{CallRecorder, Recorded};
