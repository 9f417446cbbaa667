// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Delay validation shared by both wrappers.
//!
//! A wrapper's delay is checked once, when the wrapper is created. Calls never
//! fail.

use core::time::Duration;
use pacer_error::{PacerError, Result};

/// Largest accepted delay: one year.
///
/// Keeps `now + delay` far away from instant overflow on every supported
/// runtime.
pub const MAX_DELAY: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Checks that `delay` does not exceed [`MAX_DELAY`].
///
/// # Errors
/// Returns [`PacerError::InvalidArgument`] for delays above [`MAX_DELAY`].
pub fn validate_delay(delay: Duration) -> Result<Duration> {
    if delay > MAX_DELAY {
        return Err(PacerError::invalid_argument(
            "delay",
            format!("{delay:?} exceeds the maximum of {MAX_DELAY:?}"),
        ));
    }
    Ok(delay)
}

/// Converts a millisecond count into a validated [`Duration`].
///
/// Fractional milliseconds are kept with nanosecond precision.
///
/// # Errors
/// Returns [`PacerError::InvalidArgument`] when `millis` is NaN, infinite,
/// negative or above [`MAX_DELAY`].
///
/// # Example
///
/// ```
/// use pacer::delay::delay_from_millis;
/// use std::time::Duration;
///
/// assert_eq!(delay_from_millis(250.0).unwrap(), Duration::from_millis(250));
/// assert!(delay_from_millis(-1.0).is_err());
/// assert!(delay_from_millis(f64::NAN).is_err());
/// ```
pub fn delay_from_millis(millis: f64) -> Result<Duration> {
    if !millis.is_finite() {
        return Err(PacerError::invalid_argument(
            "delay",
            format!("{millis} ms is not a finite number"),
        ));
    }
    if millis == 0.0 {
        // Also covers -0.0
        return Ok(Duration::ZERO);
    }
    if millis < 0.0 {
        return Err(PacerError::invalid_argument(
            "delay",
            format!("{millis} ms is negative"),
        ));
    }
    if millis > MAX_DELAY.as_secs_f64() * 1_000.0 {
        return Err(PacerError::invalid_argument(
            "delay",
            format!("{millis} ms exceeds the maximum of {MAX_DELAY:?}"),
        ));
    }

    validate_delay(Duration::from_secs_f64(millis / 1_000.0))
}
