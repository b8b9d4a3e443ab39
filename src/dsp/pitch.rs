//! MIDI note numbers to phase increments, without floating point.
//!
//! The top MIDI octave (notes 120..=131, C9 upward) is tabulated in
//! millihertz; every other note is the same pitch class shifted down by
//! whole octaves. The increment for a 16-bit phase is
//!
//! ```text
//! increment = freq * 65536 / sample_rate
//! ```
//!
//! computed in 64-bit integers and rounded. A4 (note 69) is 440 Hz.

use crate::dsp::fixed::add_sat_i16;

/// Frequencies of MIDI notes 120..=131 in millihertz.
const TOP_OCTAVE_MILLIHZ: [u64; 12] = [
    8_372_018, 8_869_844, 9_397_273, 9_956_063, 10_548_082, 11_175_303, 11_839_822, 12_543_854,
    13_289_750, 14_080_000, 14_917_240, 15_804_266,
];

/// Octave index of the tabulated notes.
const TOP_OCTAVE: u8 = 10;

/// `2^(2/12) - 1` in Q15: the fractional increase of a two-semitone bend.
const WHOLE_TONE_Q15: i64 = 4014;

/// Phase increment for `note` at `sample_rate`, saturating at Nyquist.
pub fn note_increment(note: u8, sample_rate: u32) -> i16 {
    let note = note & 0x7F;
    let shift = TOP_OCTAVE - note / 12;
    let freq = TOP_OCTAVE_MILLIHZ[usize::from(note % 12)];

    let den = (u64::from(sample_rate.max(1)) * 1000) << shift;
    let inc = ((freq << 16) + den / 2) / den;
    inc.min(i16::MAX as u64) as i16
}

/// Offset `increment` by a signed 14-bit pitch bend (±8192 ↦ about ±2 semitones).
///
/// The bend is linear in frequency: exact at the top of the range, slightly
/// wide at the bottom.
pub fn bend_increment(increment: i16, bend: i16) -> i16 {
    let delta = (i64::from(increment) * i64::from(bend) * WHOLE_TONE_Q15) >> 28;
    add_sat_i16(increment, delta.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_at_48k() {
        // 440 * 65536 / 48000 = 600.75
        assert_eq!(note_increment(69, 48_000), 601);
    }

    #[test]
    fn octaves_double() {
        for note in 0..115u8 {
            let low = i32::from(note_increment(note, 31_250));
            let high = i32::from(note_increment(note + 12, 31_250));
            assert!((high - 2 * low).abs() <= 1, "note {note}: {low} -> {high}");
        }
    }

    #[test]
    fn increments_rise_with_note() {
        let incs: Vec<i16> = (0..=127).map(|n| note_increment(n, 48_000)).collect();
        assert!(incs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn above_nyquist_saturates() {
        // G9 is ~12.5 kHz, past Nyquist at 8 kHz
        assert_eq!(note_increment(127, 8_000), i16::MAX);
    }

    #[test]
    fn bend_moves_about_a_whole_tone() {
        let inc = note_increment(60, 48_000);
        let up = bend_increment(inc, 8191);
        let whole_tone_up = note_increment(62, 48_000);
        assert!((i32::from(up) - i32::from(whole_tone_up)).abs() <= 2);

        assert_eq!(bend_increment(inc, 0), inc);
        assert!(bend_increment(inc, -8192) < inc);
    }

    #[test]
    fn bend_saturates() {
        assert_eq!(bend_increment(i16::MAX, 8191), i16::MAX);
    }
}
