//! Benchmarks for the full tick: control drain, parameter load, voice render.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixsynth::{
    config::{EngineConfig, EnvelopeConfig, FilterConfig},
    dsp::{filter::FilterKind, oscillator::Waveform},
    synth::{control_channel, ControlMessage, Engine, LiveParams, SharedParams},
};

use crate::BLOCK_SIZES;

fn configs() -> Vec<(&'static str, EngineConfig)> {
    vec![
        ("saw_coarse", EngineConfig::default()),
        (
            "sine_precise_tpt_lf",
            EngineConfig {
                sample_rate: 48_000,
                waveform: Waveform::Sine,
                envelope: EnvelopeConfig::Precise {
                    attack_length: 480,
                    release_length: 4800,
                    sustain_level: 0xC000_0000,
                },
                filter: FilterConfig {
                    kind: FilterKind::TrapezoidLf,
                    coefficient: 0x8000,
                },
                ..EngineConfig::default()
            },
        ),
    ]
}

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0u16; size];

        for (name, config) in configs() {
            // held note, no traffic
            let params = SharedParams::new();
            params.store(LiveParams {
                gate: true,
                ..LiveParams::default()
            });
            let (_tx, rx) = control_channel(16);
            let Ok(mut engine) = Engine::new(&config, &params, rx) else {
                continue;
            };
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for out in buffer.iter_mut() {
                        *out = engine.tick();
                    }
                    black_box(&buffer);
                })
            });

            // cutoff sweeping and a control message every block
            let (mut tx, rx) = control_channel(16);
            let Ok(mut engine) = Engine::new(&config, &params, rx) else {
                continue;
            };
            let mut live = params.load();
            group.bench_with_input(
                BenchmarkId::new(format!("{name}_modulated"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        tx.send(ControlMessage::SetSustainLevel(0x8000_0000));
                        for (i, out) in buffer.iter_mut().enumerate() {
                            if i % 32 == 0 {
                                live.cutoff = (live.cutoff + 1) & 0x7F;
                                params.store(live);
                            }
                            *out = engine.tick();
                        }
                        black_box(&buffer);
                    })
                },
            );
        }
    }

    group.finish();
}
