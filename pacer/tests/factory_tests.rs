// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::delay::MAX_DELAY;
use pacer::prelude::*;
use pacer::{debounce_with_runtime, throttle_with_runtime, PacerError};
use pacer_runtime::impls::tokio::TokioRuntime;
use pacer_test_utils::CallRecorder;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_millis_factories_accept_valid_delays() -> anyhow::Result<()> {
    let throttled = throttle_millis(|_: u8| {}, 100.0)?;
    let debounced = debounce_millis(|_: u8| {}, 12.5)?;

    assert_eq!(throttled.delay(), Duration::from_millis(100));
    assert_eq!(debounced.delay(), Duration::from_micros(12_500));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_millis_factories_reject_invalid_delays() -> anyhow::Result<()> {
    for millis in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let throttle_err = throttle_millis(|_: u8| {}, millis).unwrap_err();
        let debounce_err = debounce_millis(|_: u8| {}, millis).unwrap_err();

        assert!(throttle_err.is_invalid_argument(), "{millis}");
        assert!(debounce_err.is_invalid_argument(), "{millis}");
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_factories_reject_delay_above_maximum() -> anyhow::Result<()> {
    let too_long = MAX_DELAY + Duration::from_secs(1);

    assert!(matches!(
        throttle(|_: u8| {}, too_long),
        Err(PacerError::InvalidArgument { .. })
    ));
    assert!(matches!(
        debounce(|_: u8| {}, too_long),
        Err(PacerError::InvalidArgument { .. })
    ));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_explicit_runtime_factories() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<u32>::new();
    let throttled =
        throttle_with_runtime::<TokioRuntime, _, _>(recorder.callback(), Duration::from_millis(10))?;
    let debounced =
        debounce_with_runtime::<TokioRuntime, _, _>(recorder.callback(), Duration::from_millis(10))?;

    // Act
    throttled.call(1);
    debounced.call(2);

    // Assert
    assert_eq!(recorder.recv_timeout(0).await.map(|call| call.args), Some(1));
    assert_eq!(recorder.recv_timeout(100).await.map(|call| call.args), Some(2));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_wrappers_debug_output() -> anyhow::Result<()> {
    let throttled = (|_: u8| {}).throttled(Duration::from_millis(5))?;
    let debounced = (|_: u8| {}).debounced(Duration::from_millis(5))?;
    debounced.call(1);

    let throttled = format!("{throttled:?}");
    let debounced = format!("{debounced:?}");

    assert!(throttled.starts_with("Throttled"));
    assert!(throttled.contains("5ms"));
    assert!(debounced.contains("pending: true"));
    assert!(debounced.contains("\"tokio\""));
    Ok(())
}
