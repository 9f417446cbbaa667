// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_test_utils::helpers::{advance_to, elapsed_ms};
use pacer_test_utils::CallRecorder;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_recorder_keeps_order_and_time() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let recorder = CallRecorder::<&str>::new();
    let callback = recorder.callback();

    // Act
    callback("first");
    advance_to(start, 15).await;
    callback("second");

    // Assert
    assert_eq!(recorder.args(), vec!["first", "second"]);
    let calls = recorder.calls();
    assert_eq!(elapsed_ms(start, calls[0].at), 0);
    assert_eq!(elapsed_ms(start, calls[1].at), 15);
    assert_eq!(recorder.count(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_recv_timeout_yields_calls_then_none() -> anyhow::Result<()> {
    let recorder = CallRecorder::<u8>::new();
    let callback = recorder.callback();

    callback(1);

    assert_eq!(recorder.recv_timeout(10).await.map(|call| call.args), Some(1));
    assert!(recorder.recv_timeout(10).await.is_none());
    recorder.assert_no_call(10).await;
    Ok(())
}

#[tokio::test(start_paused = true)]
#[should_panic(expected = "Unexpected call")]
async fn test_assert_no_call_panics_on_call() {
    let recorder = CallRecorder::<u8>::new();
    recorder.callback()(3);

    recorder.assert_no_call(10).await;
}
