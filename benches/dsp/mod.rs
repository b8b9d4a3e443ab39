//! Benchmarks for low-level DSP primitives.

mod envelope;
mod filter;
mod fixed;
mod midi;
mod oscillator;

pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use fixed::bench_fixed;
pub use midi::bench_midi;
pub use oscillator::bench_oscillator;
