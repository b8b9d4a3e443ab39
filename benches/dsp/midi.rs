//! Benchmarks for byte-at-a-time MIDI decoding.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use fixsynth::io::midi::{MidiDispatcher, MidiHandler};

/// Counts events so the handler can't be optimized away.
#[derive(Default)]
struct Tally(u32);

impl MidiHandler for Tally {
    fn note(&mut self, _channel: u8, key: u8, velocity: u8) {
        self.0 = self.0.wrapping_add(u32::from(key ^ velocity));
    }

    fn control_change(&mut self, _channel: u8, controller: u8, value: u8) {
        self.0 = self.0.wrapping_add(u32::from(controller ^ value));
    }

    fn pitch_bend(&mut self, _channel: u8, value: i16) {
        self.0 = self.0.wrapping_add(value as u32);
    }
}

pub fn bench_midi(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/midi");

    // A mix of full-status and running-status traffic
    let mut stream = Vec::new();
    for i in 0..256u32 {
        let key = (i % 88) as u8 + 21;
        stream.extend_from_slice(&[0x90, key, 100, key, 0]);
        stream.extend_from_slice(&[0xB0, 74, (i & 0x7F) as u8]);
        stream.extend_from_slice(&[0xE0, 0, (i & 0x7F) as u8]);
    }

    group.throughput(Throughput::Bytes(stream.len() as u64));
    group.bench_with_input(BenchmarkId::new("dispatch", stream.len()), &stream, |b, bytes| {
        let mut midi = MidiDispatcher::new(Tally::default());
        b.iter(|| {
            midi.read_all(black_box(bytes));
            black_box(midi.handler().0);
        })
    });

    group.finish();
}
