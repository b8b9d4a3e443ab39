//! Benchmarks for the ASR envelopes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixsynth::dsp::envelope::{Asr16, Asr32};

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0u16; size];
        let mut wide = vec![0u32; size];

        // Coarse attack, re-gated so it never settles into sustain
        let mut env = Asr16::new(1, 1);
        group.bench_with_input(BenchmarkId::new("asr16_attack", size), &size, |b, _| {
            b.iter(|| {
                env.gate(true);
                for out in buffer.iter_mut() {
                    *out = env.render();
                }
                black_box(&buffer);
            })
        });

        // Coarse sustain - no arithmetic, just the state match
        let mut env = Asr16::new(0x7FFF, 0x7FFF);
        env.gate(true);
        env.render();
        env.render();
        group.bench_with_input(BenchmarkId::new("asr16_sustain", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = env.render();
                }
                black_box(&buffer);
            })
        });

        // Precise attack over a long segment
        let mut env = Asr32::new(u32::MAX / 2, 4096, u32::MAX);
        env.gate(true);
        group.bench_with_input(BenchmarkId::new("asr32_attack", size), &size, |b, _| {
            b.iter(|| {
                for out in wide.iter_mut() {
                    *out = env.render();
                }
                black_box(&wide);
            })
        });
    }

    group.finish();
}
