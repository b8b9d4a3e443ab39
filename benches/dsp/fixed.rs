//! Benchmarks for the saturating and Q-multiply kernel.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixsynth::dsp::fixed::{add_sat_i16, add_sat_u16, qmul_i16, qmul_u16, qmul_us16};

use crate::BLOCK_SIZES;

pub fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fixed");

    for &size in BLOCK_SIZES {
        let a: Vec<u16> = (0..size).map(|i| (i as u16).wrapping_mul(0x9E37)).collect();
        let b: Vec<u16> = (0..size).map(|i| (i as u16).wrapping_mul(0x7F4B)).collect();
        let mut out = vec![0u16; size];

        group.bench_with_input(BenchmarkId::new("add_sat_u16", size), &size, |bench, _| {
            bench.iter(|| {
                for ((o, &x), &y) in out.iter_mut().zip(&a).zip(&b) {
                    *o = add_sat_u16(x, y);
                }
                black_box(&out);
            })
        });

        group.bench_with_input(BenchmarkId::new("add_sat_i16", size), &size, |bench, _| {
            bench.iter(|| {
                for ((o, &x), &y) in out.iter_mut().zip(&a).zip(&b) {
                    *o = add_sat_i16(x as i16, y as i16) as u16;
                }
                black_box(&out);
            })
        });

        group.bench_with_input(BenchmarkId::new("qmul_u16", size), &size, |bench, _| {
            bench.iter(|| {
                for ((o, &x), &y) in out.iter_mut().zip(&a).zip(&b) {
                    *o = qmul_u16(x, y);
                }
                black_box(&out);
            })
        });

        group.bench_with_input(BenchmarkId::new("qmul_i16", size), &size, |bench, _| {
            bench.iter(|| {
                for ((o, &x), &y) in out.iter_mut().zip(&a).zip(&b) {
                    *o = qmul_i16(x as i16, y as i16) as u16;
                }
                black_box(&out);
            })
        });

        group.bench_with_input(BenchmarkId::new("qmul_us16", size), &size, |bench, _| {
            bench.iter(|| {
                for ((o, &x), &y) in out.iter_mut().zip(&a).zip(&b) {
                    *o = qmul_us16(x, y as i16) as u16;
                }
                black_box(&out);
            })
        });
    }

    group.finish();
}
