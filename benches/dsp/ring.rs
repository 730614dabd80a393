//! Benchmarks for ring buffer operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tapline::RingBuffer;

use crate::BLOCK_SIZES;

pub fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ring");

    for &size in BLOCK_SIZES {
        let input: Vec<f64> = (0..size).map(|i| (i as f64 * 0.1).sin()).collect();

        let mut ring = RingBuffer::new(65_536);
        group.bench_with_input(BenchmarkId::new("push_block", size), &size, |b, _| {
            b.iter(|| ring.push_block(black_box(&input)))
        });

        let mut ring = RingBuffer::new(65_536);
        ring.push_block(&input);
        let mut out = vec![0.0; size];
        group.bench_with_input(BenchmarkId::new("pull_delay_block", size), &size, |b, _| {
            b.iter(|| ring.pull_delay_block(black_box(&mut out), black_box(4800)))
        });

        // Fractional read: the two taps plus blend that chorus/flanger-style
        // modulation pays for every sample.
        group.bench_with_input(
            BenchmarkId::new("pull_delay_block_interp", size),
            &size,
            |b, _| {
                b.iter(|| ring.pull_delay_block_interp(black_box(&mut out), black_box(4800.5)))
            },
        );
    }

    group.finish();
}
