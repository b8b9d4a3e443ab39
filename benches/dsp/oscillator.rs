//! Benchmarks for phasor and wavetable oscillators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixsynth::dsp::oscillator::{Phasor16, Quadrature16, Wavetable16};

use crate::BLOCK_SIZES;

/// Roughly A4 at 48kHz.
const INCREMENT: i16 = 601;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0u16; size];

        // Saw - one wrapping add
        let mut osc = Phasor16::new(INCREMENT);
        group.bench_with_input(BenchmarkId::new("phasor", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = osc.render();
                }
                black_box(&buffer);
            })
        });

        // Sine - shift and table read on top of the phasor
        let mut osc = Wavetable16::sine();
        osc.set_increment(INCREMENT);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = osc.render();
                }
                black_box(&buffer);
            })
        });

        // Quadrature - two table reads per sample
        let mut osc = Quadrature16::new();
        osc.set_increment(INCREMENT);
        group.bench_with_input(BenchmarkId::new("quadrature", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = osc.render() ^ osc.cosine();
                }
                black_box(&buffer);
            })
        });
    }

    group.finish();
}
