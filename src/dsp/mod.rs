//! Fixed-point DSP primitives.
//!
//! Every component here works on integer Q-format samples, holds its state
//! inline, and never allocates, so voices can embed them by value and call
//! them from the tick.

/// Saturating arithmetic and Q-format multiplies.
pub mod fixed;
/// Scaled reads from static sample tables.
pub mod table;
/// Phase accumulators and wavetable oscillators.
pub mod oscillator;
/// ASR envelope generators.
pub mod envelope;
/// One-pole low-pass/high-pass filters.
pub mod filter;
/// MIDI note to phase increment.
pub mod pitch;

pub use envelope::{Envelope, EnvelopeState};
pub use filter::{FilterKind, OnePole};
pub use oscillator::{Oscillator, Waveform};
