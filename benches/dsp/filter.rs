//! Benchmarks for the one-pole filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixsynth::dsp::filter::{FilterKind, OnePole};

use crate::BLOCK_SIZES;

const KINDS: &[(&str, FilterKind)] = &[
    ("exponential", FilterKind::Exponential),
    ("exponential_lf", FilterKind::ExponentialLf),
    ("trapezoid", FilterKind::Trapezoid),
    ("trapezoid_lf", FilterKind::TrapezoidLf),
];

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Sawtooth input
        let input: Vec<u16> = (0..size).map(|i| (i as u16).wrapping_mul(601)).collect();
        let mut output = vec![0u16; size];

        for &(name, kind) in KINDS {
            let mut filter = OnePole::new(kind, 0x2000);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (out, &x) in output.iter_mut().zip(&input) {
                        *out = filter.process(black_box(x));
                    }
                    black_box(&output);
                })
            });
        }
    }

    group.finish();
}
