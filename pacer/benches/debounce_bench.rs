// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use pacer::debounce;
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_burst");
    let bursts = [1usize, 10, 100];

    for &burst in &bursts {
        group.throughput(Throughput::Elements(burst as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(burst),
            &burst,
            |bencher, &burst| {
                bencher.iter(|| {
                    // 1. Setup a lightweight, paused runtime
                    let rt = Builder::new_current_thread()
                        .enable_time()
                        .start_paused(true)
                        .build()
                        .unwrap();

                    rt.block_on(async {
                        // 2. Wrap a callback
                        let delay = Duration::from_millis(10);
                        let debounced = debounce(
                            |value: usize| {
                                black_box(value);
                            },
                            delay,
                        )
                        .unwrap();

                        // 3. Each call supersedes the previous one
                        for value in 0..burst {
                            debounced.call(black_box(value));
                        }

                        // 4. Let the last call fire
                        advance(delay).await;
                        tokio::task::yield_now().await;
                    });
                });
            },
        );
    }

    group.finish();
}
