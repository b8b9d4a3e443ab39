use thiserror::Error;

/// Rejected construction-time parameters.
///
/// Nothing in the per-sample path returns this: once a voice or table is
/// built, rendering is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("sample rate must be non-zero")]
    ZeroSampleRate,

    #[error("MIDI channel {0} is out of range (expected 0..=15)")]
    MidiChannel(u8),

    #[error("MIDI controller number {0} is out of range (expected 0..=127)")]
    Controller(u8),

    #[error("{segment} length must be at least one sample")]
    ZeroSegmentLength { segment: &'static str },

    #[error("table length {0} is not a power of two")]
    TableLength(usize),

    #[error("shift {shift} maps a 16-bit phase onto {expected} entries, but the table has {len}")]
    TableShift {
        shift: u8,
        len: usize,
        expected: usize,
    },
}
