//! Read-only waveform and curve tables.
//!
//! Generated offline; every table is a power of two long so an oscillator can
//! reach it with a plain right shift of its phase.

mod exp;
mod sine;

pub use exp::EXP1000_U16X1024;
pub use sine::SINE_U16X1024;
