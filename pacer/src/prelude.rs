// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-exports: `use pacer::prelude::*;`

pub use crate::debounce::{debounce, debounce_millis, DebounceExt, Debounced};
pub use crate::delay::{delay_from_millis, validate_delay, MAX_DELAY};
pub use crate::throttle::{throttle, throttle_millis, ThrottleExt, Throttled};
pub use crate::DefaultRuntime;
