//! Parameters written by the MIDI side and read by the tick.

/*
Live Parameter Handoff
======================

The MIDI dispatcher runs on the main loop; the render runs in the tick
interrupt. Everything the tick needs from MIDI fits in one 32-bit word, so
the main loop rebuilds the whole word and publishes it with a single store.
The tick loads the word once per sample. It sees either the old bundle or the
new one, never half of each.

    bit   31 ......... 22  21 ... 15  14 ... 8  7 ..... 1  0
          bend (10 bits)   cutoff     velocity  note       gate

Bend keeps the top 10 bits of the 14-bit wheel value. The low four bits are
below what the linear bend can resolve at audio increments anyway.

Ordering
--------

  writer   store(Release)   every field of the bundle is visible together
  reader   load(Acquire)    pairs with the store above

Nothing else is shared between the two contexts through this path.
*/

use std::sync::atomic::{AtomicU32, Ordering};

use crate::io::midi::MidiHandler;

/// CC 123: all notes off.
pub const ALL_NOTES_OFF: u8 = 123;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveParams {
    pub gate: bool,
    pub note: u8,
    pub velocity: u8,
    /// Cutoff controller position, 0..=127.
    pub cutoff: u8,
    /// Centered pitch bend, -8192..=8191, quantized to multiples of 16.
    pub bend: i16,
}

impl Default for LiveParams {
    fn default() -> Self {
        Self {
            gate: false,
            note: 60,
            velocity: 100,
            cutoff: 127,
            bend: 0,
        }
    }
}

impl LiveParams {
    const NOTE_SHIFT: u32 = 1;
    const VELOCITY_SHIFT: u32 = 8;
    const CUTOFF_SHIFT: u32 = 15;
    const BEND_SHIFT: u32 = 22;

    pub fn pack(&self) -> u32 {
        let bend = ((self.bend >> 4) as u32) << Self::BEND_SHIFT;
        u32::from(self.gate)
            | u32::from(self.note & 0x7F) << Self::NOTE_SHIFT
            | u32::from(self.velocity & 0x7F) << Self::VELOCITY_SHIFT
            | u32::from(self.cutoff & 0x7F) << Self::CUTOFF_SHIFT
            | bend
    }

    pub fn unpack(word: u32) -> Self {
        Self {
            gate: word & 1 != 0,
            note: (word >> Self::NOTE_SHIFT) as u8 & 0x7F,
            velocity: (word >> Self::VELOCITY_SHIFT) as u8 & 0x7F,
            cutoff: (word >> Self::CUTOFF_SHIFT) as u8 & 0x7F,
            // arithmetic shift sign-extends the 10-bit field
            bend: (((word as i32) >> Self::BEND_SHIFT) << 4) as i16,
        }
    }
}

/// One published [`LiveParams`] bundle.
#[derive(Debug)]
pub struct SharedParams {
    word: AtomicU32,
}

impl SharedParams {
    pub const fn new() -> Self {
        // gate off, note 60, velocity 100, cutoff 127, no bend
        Self {
            word: AtomicU32::new(60 << 1 | 100 << 8 | 127 << 15),
        }
    }

    #[inline]
    pub fn load(&self) -> LiveParams {
        LiveParams::unpack(self.word.load(Ordering::Acquire))
    }

    #[inline]
    pub fn store(&self, params: LiveParams) {
        self.word.store(params.pack(), Ordering::Release);
    }
}

impl Default for SharedParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys a monophonic voice remembers for last-note priority.
const HELD_KEYS: usize = 8;

/// Applies MIDI events to a local [`LiveParams`] and republishes it.
///
/// Monophonic, last-note priority: releasing the sounding key falls back to
/// the most recent key still held.
pub struct ParamWriter<'a> {
    shared: &'a SharedParams,
    local: LiveParams,
    channel: Option<u8>,
    cutoff_controller: u8,
    held: [u8; HELD_KEYS],
    held_len: usize,
}

impl<'a> ParamWriter<'a> {
    pub fn new(shared: &'a SharedParams, channel: Option<u8>, cutoff_controller: u8) -> Self {
        let local = shared.load();
        Self {
            shared,
            local,
            channel,
            cutoff_controller,
            held: [0; HELD_KEYS],
            held_len: 0,
        }
    }

    pub fn params(&self) -> LiveParams {
        self.local
    }

    fn listening(&self, channel: u8) -> bool {
        self.channel.is_none() || self.channel == Some(channel)
    }

    fn publish(&self) {
        self.shared.store(self.local);
    }

    fn press(&mut self, key: u8, velocity: u8) {
        self.release_key(key);
        if self.held_len == HELD_KEYS {
            self.held.copy_within(1.., 0);
            self.held_len -= 1;
        }
        self.held[self.held_len] = key;
        self.held_len += 1;

        self.local.note = key;
        self.local.velocity = velocity;
        self.local.gate = true;
    }

    fn release_key(&mut self, key: u8) {
        if let Some(pos) = self.held[..self.held_len].iter().position(|&k| k == key) {
            self.held.copy_within(pos + 1..self.held_len, pos);
            self.held_len -= 1;
        }
    }

    fn release(&mut self, key: u8) {
        self.release_key(key);
        if self.local.note != key {
            return;
        }
        match self.held[..self.held_len].last() {
            Some(&prev) => self.local.note = prev,
            None => self.local.gate = false,
        }
    }

    fn all_notes_off(&mut self) {
        self.held_len = 0;
        self.local.gate = false;
    }
}

impl MidiHandler for ParamWriter<'_> {
    fn note(&mut self, channel: u8, key: u8, velocity: u8) {
        if !self.listening(channel) {
            return;
        }
        if velocity == 0 {
            self.release(key);
        } else {
            self.press(key, velocity);
        }
        self.publish();
    }

    fn control_change(&mut self, channel: u8, controller: u8, value: u8) {
        if !self.listening(channel) {
            return;
        }
        if controller == self.cutoff_controller {
            self.local.cutoff = value;
        } else if controller == ALL_NOTES_OFF {
            self.all_notes_off();
        } else {
            return;
        }
        self.publish();
    }

    fn pitch_bend(&mut self, channel: u8, value: i16) {
        if !self.listening(channel) {
            return;
        }
        self.local.bend = value;
        self.publish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::midi::MidiDispatcher;

    #[test]
    fn pack_unpack_keeps_fields() {
        let params = LiveParams {
            gate: true,
            note: 127,
            velocity: 1,
            cutoff: 64,
            bend: -8192,
        };
        assert_eq!(LiveParams::unpack(params.pack()), params);

        let params = LiveParams {
            bend: 8191,
            ..LiveParams::default()
        };
        assert_eq!(LiveParams::unpack(params.pack()).bend, 8176);
    }

    #[test]
    fn shared_default_matches_live_default() {
        assert_eq!(SharedParams::new().load(), LiveParams::default());
    }

    #[test]
    fn note_on_and_off_publish() {
        let shared = SharedParams::new();
        let mut midi = MidiDispatcher::new(ParamWriter::new(&shared, None, 74));

        midi.read_all(&[0x90, 0x40, 0x50]);
        let live = shared.load();
        assert!(live.gate);
        assert_eq!(live.note, 0x40);
        assert_eq!(live.velocity, 0x50);

        midi.read_all(&[0x80, 0x40, 0x7F]);
        assert!(!shared.load().gate);
    }

    #[test]
    fn last_note_priority() {
        let shared = SharedParams::new();
        let mut midi = MidiDispatcher::new(ParamWriter::new(&shared, None, 74));

        // running status: three note-ons, then releases as velocity 0
        midi.read_all(&[0x90, 60, 100, 64, 100, 67, 100]);
        assert_eq!(shared.load().note, 67);

        // releasing a key that isn't sounding changes nothing
        midi.read_all(&[64, 0]);
        assert_eq!(shared.load().note, 67);
        assert!(shared.load().gate);

        midi.read_all(&[67, 0]);
        assert_eq!(shared.load().note, 60);
        assert!(shared.load().gate);

        midi.read_all(&[60, 0]);
        assert!(!shared.load().gate);
    }

    #[test]
    fn held_keys_overflow_drops_oldest() {
        let shared = SharedParams::new();
        let mut writer = ParamWriter::new(&shared, None, 74);
        for key in 40..50 {
            writer.note(0, key, 100);
        }
        for key in (42..50).rev() {
            writer.note(0, key, 0);
        }
        // 40 and 41 fell off the end of the held list
        assert!(!shared.load().gate);
    }

    #[test]
    fn cutoff_bend_and_panic() {
        let shared = SharedParams::new();
        let mut midi = MidiDispatcher::new(ParamWriter::new(&shared, None, 74));

        midi.read_all(&[0xB0, 74, 20]);
        assert_eq!(shared.load().cutoff, 20);

        // other controllers are ignored
        midi.read_all(&[0xB0, 1, 99]);
        assert_eq!(shared.load().cutoff, 20);

        midi.read_all(&[0xE0, 0x00, 0x00]);
        assert_eq!(shared.load().bend, -8192);

        midi.read_all(&[0x90, 50, 90, 52, 90]);
        midi.read_all(&[0xB0, ALL_NOTES_OFF, 0]);
        assert!(!shared.load().gate);
        // held list was cleared too
        midi.read_all(&[0x80, 52, 0]);
        assert!(!shared.load().gate);
    }

    #[test]
    fn channel_filter() {
        let shared = SharedParams::new();
        let mut midi = MidiDispatcher::new(ParamWriter::new(&shared, Some(2), 74));

        midi.read_all(&[0x90, 60, 100]);
        assert!(!shared.load().gate);

        midi.read_all(&[0x92, 60, 100]);
        assert!(shared.load().gate);
        assert_eq!(midi.handler().params(), shared.load());
    }
}
