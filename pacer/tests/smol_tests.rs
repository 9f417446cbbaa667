// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-smol")]

use async_channel::unbounded;
use pacer::{debounce_with_runtime, throttle_with_runtime};
use pacer_runtime::impls::smol::SmolRuntime;
use std::time::{Duration, Instant};

#[test]
fn test_smol_debounce_coalesces_burst() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let (tx, rx) = unbounded();
        let debounced = debounce_with_runtime::<SmolRuntime, _, _>(
            move |value: u32| {
                let _ = tx.try_send((value, Instant::now()));
            },
            Duration::from_millis(20),
        )?;
        let start = Instant::now();

        // Act
        debounced.call(1);
        debounced.call(2);
        debounced.call(3);

        // Assert
        let (value, at) = rx.recv().await?;
        assert_eq!(value, 3);
        assert!(at - start >= Duration::from_millis(20));
        assert!(rx.try_recv().is_err());
        Ok::<(), anyhow::Error>(())
    })
}

#[test]
fn test_smol_throttle_leading_edge() -> anyhow::Result<()> {
    let (tx, rx) = unbounded();
    let throttled = throttle_with_runtime::<SmolRuntime, _, _>(
        move |value: u32| {
            let _ = tx.try_send(value);
        },
        Duration::from_secs(60),
    )?;

    throttled.call(1);
    throttled.call(2);

    assert_eq!(rx.try_recv()?, 1);
    assert!(rx.try_recv().is_err());
    Ok(())
}
