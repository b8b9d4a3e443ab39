//! Engine configuration.
//!
//! Everything here is read once, on the control side, when an [`Engine`] is
//! built. With the `serde` feature the whole tree (de)serializes, which is how
//! the `fixsynth` binary loads patches from JSON.
//!
//! [`Engine`]: crate::synth::Engine

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{
        envelope::{Asr16, Asr32, Envelope},
        filter::FilterKind,
        oscillator::Waveform,
    },
    error::ConfigError,
};

/// MIDI CC 74, "brightness", conventionally the filter cutoff.
pub const DEFAULT_CUTOFF_CONTROLLER: u8 = 74;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tick rate in Hz. Every per-sample rate and length is counted in ticks.
    pub sample_rate: u32,
    pub waveform: Waveform,
    pub envelope: EnvelopeConfig,
    pub filter: FilterConfig,
    /// Listen on one channel (0..=15), or on all of them when `None`.
    pub midi_channel: Option<u8>,
    pub cutoff_controller: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 31_250,
            waveform: Waveform::Saw,
            envelope: EnvelopeConfig::default(),
            filter: FilterConfig::default(),
            midi_channel: None,
            cutoff_controller: DEFAULT_CUTOFF_CONTROLLER,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if let Some(channel) = self.midi_channel {
            if channel > 15 {
                return Err(ConfigError::MidiChannel(channel));
            }
        }
        if self.cutoff_controller > 127 {
            return Err(ConfigError::Controller(self.cutoff_controller));
        }
        self.envelope.validate()
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeConfig {
    /// Accumulator envelope; rates are added per tick.
    Coarse { attack_rate: u16, release_rate: u16 },
    /// Interpolating envelope; lengths are in ticks.
    Precise {
        attack_length: u32,
        release_length: u32,
        sustain_level: u32,
    },
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        EnvelopeConfig::Coarse {
            attack_rate: 0x0100,
            release_rate: 0x0020,
        }
    }
}

impl EnvelopeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            EnvelopeConfig::Coarse { .. } => Ok(()),
            EnvelopeConfig::Precise { attack_length: 0, .. } => {
                Err(ConfigError::ZeroSegmentLength { segment: "attack" })
            }
            EnvelopeConfig::Precise { release_length: 0, .. } => {
                Err(ConfigError::ZeroSegmentLength { segment: "release" })
            }
            EnvelopeConfig::Precise { .. } => Ok(()),
        }
    }

    pub fn build(&self) -> Envelope {
        match *self {
            EnvelopeConfig::Coarse {
                attack_rate,
                release_rate,
            } => Envelope::Coarse(Asr16::new(attack_rate, release_rate)),
            EnvelopeConfig::Precise {
                attack_length,
                release_length,
                sustain_level,
            } => Envelope::Precise(Asr32::new(attack_length, release_length, sustain_level)),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub kind: FilterKind,
    /// Coefficient with the cutoff controller fully open (UQ16).
    pub coefficient: u16,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: FilterKind::Exponential,
            coefficient: 0xC000,
        }
    }
}
