// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle and debounce wrappers for callbacks.
//!
//! Both wrappers take a callback and return a new callable that controls how
//! often the callback actually runs in response to a rapid stream of calls.
//!
//! # Overview
//!
//! - **[`Throttled`]** - leading-edge throttle: the first call fires at once,
//!   calls within the cooldown window that follows are dropped
//! - **[`Debounced`]** - trailing-edge debounce: fires once, after a quiet
//!   period, with the arguments of the last call
//! - **[`ThrottleExt`] / [`DebounceExt`]** - method-style wrapping of closures
//! - **[`delay`]** - delay validation and millisecond conversion
//!
//! Arguments are a single generic value; pass a tuple to forward several.
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - [`TokioRuntime`](pacer_runtime::impls::tokio::TokioRuntime)
//! - `runtime-smol` - [`SmolRuntime`](pacer_runtime::impls::smol::SmolRuntime)
//!
//! The `tracing` feature (default) logs fire, suppress and reschedule events.
//!
//! # Example
//!
//! ```rust
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> pacer::Result<()> {
//! let save = debounce(|text: String| println!("saving {text}"), Duration::from_millis(300))?;
//! save.call("draft 1".to_string());
//! save.call("draft 2".to_string()); // supersedes draft 1
//!
//! let on_scroll = (|offset: u32| println!("scrolled to {offset}"))
//!     .throttled(Duration::from_millis(100))?;
//! on_scroll.call(10); // fires
//! on_scroll.call(20); // dropped
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("pacer needs one of the `runtime-tokio` or `runtime-smol` features");

#[macro_use]
mod logging;

mod debounce;
pub mod delay;
pub mod prelude;
mod throttle;

pub use debounce::{debounce, debounce_millis, debounce_with_runtime, DebounceExt, Debounced};
pub use pacer_error::{PacerError, Result};
pub use throttle::{throttle, throttle_millis, throttle_with_runtime, ThrottleExt, Throttled};

/// Runtime used when none is named explicitly.
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = pacer_runtime::impls::tokio::TokioRuntime;

/// Runtime used when none is named explicitly.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = pacer_runtime::impls::smol::SmolRuntime;
