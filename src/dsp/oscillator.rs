//! Phase accumulators and table-lookup oscillators.

/*
Phase Accumulation
==================

An oscillator here is a 16-bit counter that is allowed to overflow. One full
trip around the counter is one period of the waveform.

  phase       Position in the period, [0, 2π) ↦ [0, 0xFFFF]. Wraps.

  increment   Signed step added to `phase` every sample, [-π, π) ↦
              [-0x8000, 0x7FFF]. Positive increments give rising ramps,
              negative increments give falling ramps. Magnitude is pitch:

                  increment = frequency * 65536 / sample_rate

  shift       How far to shift `phase` right to land in a wavetable.
              A 1024-entry table needs a 10-bit index: shift = 16 - 10 = 6.


Render Then Advance
-------------------

`render()` hands out the phase it had on entry, then steps. The first call
after construction therefore returns 0, not `increment`:

    call:     1      2      3      4
    output:   0      k      2k     3k
    phase:    k      2k     3k     4k     (after the call)

Table oscillators index with the same pre-advance phase, so a wavetable
renderer and the phasor it wraps always agree on which sample "now" is.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::table::LookupTable,
    error::ConfigError,
    tables::SINE_U16X1024,
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Saw,
    Sine,
}

/// Naive sawtooth from a wrapping 16-bit phase accumulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Phasor16 {
    phase: u16,
    increment: i16,
}

impl Phasor16 {
    pub fn new(increment: i16) -> Self {
        Self {
            phase: 0,
            increment,
        }
    }

    /// Return the current phase, then advance it by `increment` modulo 2^16.
    #[inline]
    pub fn render(&mut self) -> u16 {
        let out = self.phase;
        self.phase = self.phase.wrapping_add_signed(self.increment);
        out
    }

    pub fn phase(&self) -> u16 {
        self.phase
    }

    pub fn increment(&self) -> i16 {
        self.increment
    }

    pub fn set_increment(&mut self, increment: i16) {
        self.increment = increment;
    }

    pub fn reset_phase(&mut self, phase: u16) {
        self.phase = phase;
    }
}

/// Phasor driving a lookup into a power-of-two wavetable.
#[derive(Debug, Clone, Copy)]
pub struct Wavetable16 {
    phasor: Phasor16,
    table: LookupTable,
    shift: u8,
}

impl Wavetable16 {
    /// `shift` must map the 16-bit phase onto the table's index range; use
    /// [`Wavetable16::checked`] when that isn't known statically.
    pub fn new(table: &'static [u16], shift: u8) -> Self {
        Self {
            phasor: Phasor16::default(),
            table: LookupTable::new(table),
            shift,
        }
    }

    pub fn checked(table: &'static [u16], shift: u8) -> Result<Self, ConfigError> {
        let table = LookupTable::checked(table, u16::MAX)?;
        let expected = 1usize << 16u32.saturating_sub(u32::from(shift));
        if shift > 16 || table.len() != expected {
            return Err(ConfigError::TableShift {
                shift,
                len: table.len(),
                expected,
            });
        }
        Ok(Self {
            phasor: Phasor16::default(),
            table,
            shift,
        })
    }

    /// Sine oscillator over the built-in 1024-entry table.
    pub fn sine() -> Self {
        Self::new(&SINE_U16X1024, 6)
    }

    /// Look up the table at the current phase, then advance the phasor.
    #[inline]
    pub fn render(&mut self) -> u16 {
        let sample = self.table.lookup(usize::from(self.phasor.phase() >> self.shift));
        self.phasor.render();
        sample
    }

    pub fn phasor(&self) -> &Phasor16 {
        &self.phasor
    }

    pub fn phasor_mut(&mut self) -> &mut Phasor16 {
        &mut self.phasor
    }

    pub fn set_increment(&mut self, increment: i16) {
        self.phasor.set_increment(increment);
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }
}

/// Sine oscillator that also produces the matching cosine.
#[derive(Debug, Clone, Copy)]
pub struct Quadrature16 {
    sine: Wavetable16,
    cosine: u16,
}

impl Quadrature16 {
    const QUARTER: u16 = 1 << 14;

    pub fn new() -> Self {
        Self {
            sine: Wavetable16::sine(),
            cosine: 0,
        }
    }

    /// Render sine and cosine from the same phase; returns the sine.
    ///
    /// The cosine is read before the wrapped sine advances the phase.
    #[inline]
    pub fn render(&mut self) -> u16 {
        let phase = self.sine.phasor().phase();
        let idx = phase.wrapping_add(Self::QUARTER) >> self.sine.shift();
        self.cosine = SINE_U16X1024[usize::from(idx)];
        self.sine.render()
    }

    /// Cosine produced by the most recent `render()`.
    pub fn cosine(&self) -> u16 {
        self.cosine
    }

    pub fn set_increment(&mut self, increment: i16) {
        self.sine.set_increment(increment);
    }
}

impl Default for Quadrature16 {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-voice choice of oscillator.
#[derive(Debug, Clone, Copy)]
pub enum Oscillator {
    Saw(Phasor16),
    Table(Wavetable16),
}

impl Oscillator {
    pub fn new(waveform: Waveform) -> Self {
        match waveform {
            Waveform::Saw => Oscillator::Saw(Phasor16::default()),
            Waveform::Sine => Oscillator::Table(Wavetable16::sine()),
        }
    }

    #[inline]
    pub fn render(&mut self) -> u16 {
        match self {
            Oscillator::Saw(osc) => osc.render(),
            Oscillator::Table(osc) => osc.render(),
        }
    }

    fn phasor_mut(&mut self) -> &mut Phasor16 {
        match self {
            Oscillator::Saw(osc) => osc,
            Oscillator::Table(osc) => osc.phasor_mut(),
        }
    }

    pub fn set_increment(&mut self, increment: i16) {
        self.phasor_mut().set_increment(increment);
    }

    pub fn reset_phase(&mut self) {
        self.phasor_mut().reset_phase(0);
    }
}
