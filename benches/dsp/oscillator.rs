//! Benchmarks for the smoothed oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tapline::SmoothedOscillator;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut osc = SmoothedOscillator::new(48_000.0, 440.0, 0.0, 1.0, 10.0);
        let mut out = vec![0.0; size];
        let mut high = false;

        group.bench_with_input(BenchmarkId::new("process_block", size), &size, |b, _| {
            b.iter(|| {
                // Retarget each block so both smoothers keep ramping.
                high = !high;
                osc.set_frequency(if high { 880.0 } else { 440.0 });
                osc.process_block(black_box(&mut out));
            })
        });
    }

    group.finish();
}
