//! Benchmarks for the parameter smoother.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tapline::SmoothedValue;

use crate::BLOCK_SIZES;

pub fn bench_smooth(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/smooth");

    for &size in BLOCK_SIZES {
        let mut smooth = SmoothedValue::new(48_000.0);
        smooth.set_smoothing_time(10.0);
        let mut out = vec![0.0; size];
        let mut flip = 0.0;

        group.bench_with_input(BenchmarkId::new("next_block", size), &size, |b, _| {
            b.iter(|| {
                // Keep a ramp in flight so the advance path is exercised.
                flip = 1.0 - flip;
                smooth.set_target(flip);
                smooth.next_block(black_box(&mut out));
            })
        });
    }

    group.finish();
}
