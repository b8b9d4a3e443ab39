//! Byte-at-a-time MIDI channel-message decoder.

/*
MIDI Dispatching
================

Serial MIDI arrives one byte at a time, usually from a UART receive interrupt.
The dispatcher reassembles those bytes into channel messages and hands each
complete message to a handler.

Vocabulary
----------

  status byte   High bit set. Upper nibble is the message type, lower nibble
                the channel (0..=15).

  data byte     High bit clear, 0..=127. One or two follow each status byte.

  running status
                A sender may omit repeated status bytes: `90 3C 7F 40 7F` is
                two note-ons. Because the status we last saw is kept until a
                new status byte replaces it, a completed message leaves the
                dispatcher ready for another of the same type, so running
                status decodes without a dedicated path.


Message Lengths
---------------

    type                status   data bytes   handler
    ------------------  -------  -----------  ------------------------------
    note off            0x8n     key, vel     note(ch, key, 0)
    note on             0x9n     key, vel     note(ch, key, vel)
    poly pressure       0xAn     key, value   poly_pressure(ch, key, value)
    control change      0xBn     cc, value    control_change(ch, cc, value)
    program change      0xCn     program      program_change(ch, program)
    channel pressure    0xDn     value        channel_pressure(ch, value)
    pitch bend          0xEn     lsb, msb     pitch_bend(ch, value)
    system              0xFn     (ignored until the next status byte)

Note-off is folded into the note handler with velocity forced to zero, so a
voice has one entry point for its whole note lifecycle.


Resynchronizing
---------------

Any byte with the high bit set starts over, even mid-message:

    90 40 | 90 3C 7F
          ↑ new status; the half-finished first note-on is discarded

There are no errors to report. A garbled stream costs at most the message in
flight.
*/

/// A complete channel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    /// Note on, or note off with `velocity == 0`.
    Note { channel: u8, key: u8, velocity: u8 },
    PolyPressure { channel: u8, key: u8, pressure: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    ProgramChange { channel: u8, program: u8 },
    ChannelPressure { channel: u8, pressure: u8 },
    /// Centered 14-bit bend, -8192..=8191.
    PitchBend { channel: u8, value: i16 },
}

impl MidiEvent {
    pub fn channel(&self) -> u8 {
        match *self {
            MidiEvent::Note { channel, .. }
            | MidiEvent::PolyPressure { channel, .. }
            | MidiEvent::ControlChange { channel, .. }
            | MidiEvent::ProgramChange { channel, .. }
            | MidiEvent::ChannelPressure { channel, .. }
            | MidiEvent::PitchBend { channel, .. } => channel,
        }
    }

    /// Route this event to the matching handler method.
    pub fn dispatch<H: MidiHandler + ?Sized>(self, handler: &mut H) {
        match self {
            MidiEvent::Note {
                channel,
                key,
                velocity,
            } => handler.note(channel, key, velocity),
            MidiEvent::PolyPressure {
                channel,
                key,
                pressure,
            } => handler.poly_pressure(channel, key, pressure),
            MidiEvent::ControlChange {
                channel,
                controller,
                value,
            } => handler.control_change(channel, controller, value),
            MidiEvent::ProgramChange { channel, program } => {
                handler.program_change(channel, program)
            }
            MidiEvent::ChannelPressure { channel, pressure } => {
                handler.channel_pressure(channel, pressure)
            }
            MidiEvent::PitchBend { channel, value } => handler.pitch_bend(channel, value),
        }
    }
}

/// One method per message category. Every method defaults to doing nothing,
/// so a handler only implements what it cares about.
pub trait MidiHandler {
    fn note(&mut self, _channel: u8, _key: u8, _velocity: u8) {}

    fn poly_pressure(&mut self, _channel: u8, _key: u8, _pressure: u8) {}

    fn control_change(&mut self, _channel: u8, _controller: u8, _value: u8) {}

    fn program_change(&mut self, _channel: u8, _program: u8) {}

    fn channel_pressure(&mut self, _channel: u8, _pressure: u8) {}

    fn pitch_bend(&mut self, _channel: u8, _value: i16) {}
}

impl<H: MidiHandler + ?Sized> MidiHandler for &mut H {
    fn note(&mut self, channel: u8, key: u8, velocity: u8) {
        (**self).note(channel, key, velocity)
    }

    fn poly_pressure(&mut self, channel: u8, key: u8, pressure: u8) {
        (**self).poly_pressure(channel, key, pressure)
    }

    fn control_change(&mut self, channel: u8, controller: u8, value: u8) {
        (**self).control_change(channel, controller, value)
    }

    fn program_change(&mut self, channel: u8, program: u8) {
        (**self).program_change(channel, program)
    }

    fn channel_pressure(&mut self, channel: u8, pressure: u8) {
        (**self).channel_pressure(channel, pressure)
    }

    fn pitch_bend(&mut self, channel: u8, value: i16) {
        (**self).pitch_bend(channel, value)
    }
}

/// Plain function-pointer slots, one per category. Empty slots drop the
/// message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Callbacks {
    pub note: Option<fn(u8, u8, u8)>,
    pub poly_pressure: Option<fn(u8, u8, u8)>,
    pub control_change: Option<fn(u8, u8, u8)>,
    pub program_change: Option<fn(u8, u8)>,
    pub channel_pressure: Option<fn(u8, u8)>,
    pub pitch_bend: Option<fn(u8, i16)>,
}

impl MidiHandler for Callbacks {
    fn note(&mut self, channel: u8, key: u8, velocity: u8) {
        if let Some(f) = self.note {
            f(channel, key, velocity);
        }
    }

    fn poly_pressure(&mut self, channel: u8, key: u8, pressure: u8) {
        if let Some(f) = self.poly_pressure {
            f(channel, key, pressure);
        }
    }

    fn control_change(&mut self, channel: u8, controller: u8, value: u8) {
        if let Some(f) = self.control_change {
            f(channel, controller, value);
        }
    }

    fn program_change(&mut self, channel: u8, program: u8) {
        if let Some(f) = self.program_change {
            f(channel, program);
        }
    }

    fn channel_pressure(&mut self, channel: u8, pressure: u8) {
        if let Some(f) = self.channel_pressure {
            f(channel, pressure);
        }
    }

    fn pitch_bend(&mut self, channel: u8, value: i16) {
        if let Some(f) = self.pitch_bend {
            f(channel, value);
        }
    }
}

const NOTE_OFF: u8 = 0x80;
const NOTE_ON: u8 = 0x90;
const POLY_PRESSURE: u8 = 0xA0;
const CONTROL_CHANGE: u8 = 0xB0;
const PROGRAM_CHANGE: u8 = 0xC0;
const CHANNEL_PRESSURE: u8 = 0xD0;
const PITCH_BEND: u8 = 0xE0;
const SYSTEM: u8 = 0xF0;

/// The byte-level state machine, with no handler attached.
#[derive(Debug, Clone, Default)]
pub struct MidiParser {
    status: u8,
    channel: u8,
    data: [u8; 2],
    index: usize,
}

impl MidiParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte; returns the message it completes, if any.
    #[inline]
    pub fn read(&mut self, byte: u8) -> Option<MidiEvent> {
        if byte & 0x80 != 0 {
            self.status = byte & 0xF0;
            self.channel = byte & 0x0F;
            self.index = 0;
            return None;
        }

        match self.status {
            // before any status byte, and for system messages
            0 | SYSTEM => None,
            PROGRAM_CHANGE | CHANNEL_PRESSURE => {
                self.data[0] = byte;
                self.complete()
            }
            _ => {
                self.data[self.index] = byte;
                if self.index == 0 {
                    self.index = 1;
                    None
                } else {
                    self.index = 0;
                    self.complete()
                }
            }
        }
    }

    fn complete(&self) -> Option<MidiEvent> {
        let channel = self.channel;
        let [first, second] = self.data;
        match self.status {
            NOTE_ON => Some(MidiEvent::Note {
                channel,
                key: first,
                velocity: second,
            }),
            NOTE_OFF => Some(MidiEvent::Note {
                channel,
                key: first,
                velocity: 0,
            }),
            POLY_PRESSURE => Some(MidiEvent::PolyPressure {
                channel,
                key: first,
                pressure: second,
            }),
            CONTROL_CHANGE => Some(MidiEvent::ControlChange {
                channel,
                controller: first,
                value: second,
            }),
            PROGRAM_CHANGE => Some(MidiEvent::ProgramChange {
                channel,
                program: first,
            }),
            CHANNEL_PRESSURE => Some(MidiEvent::ChannelPressure {
                channel,
                pressure: first,
            }),
            PITCH_BEND => Some(MidiEvent::PitchBend {
                channel,
                value: ((i16::from(second) << 7) | i16::from(first)) - 0x2000,
            }),
            _ => None,
        }
    }

    /// Message type of the most recent status byte (`0x80..=0xF0`), or 0.
    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }
}

/// Parser plus the handler it reports to.
#[derive(Debug, Clone, Default)]
pub struct MidiDispatcher<H> {
    parser: MidiParser,
    handler: H,
}

impl<H: MidiHandler> MidiDispatcher<H> {
    pub fn new(handler: H) -> Self {
        Self {
            parser: MidiParser::new(),
            handler,
        }
    }

    /// Feed one byte, invoking the handler if it completes a message.
    #[inline]
    pub fn read(&mut self, byte: u8) {
        if let Some(event) = self.parser.read(byte) {
            event.dispatch(&mut self.handler);
        }
    }

    pub fn read_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.read(byte);
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct Recorder {
        events: Vec<MidiEvent>,
    }

    impl MidiHandler for Recorder {
        fn note(&mut self, channel: u8, key: u8, velocity: u8) {
            self.events.push(MidiEvent::Note {
                channel,
                key,
                velocity,
            });
        }

        fn control_change(&mut self, channel: u8, controller: u8, value: u8) {
            self.events.push(MidiEvent::ControlChange {
                channel,
                controller,
                value,
            });
        }

        fn program_change(&mut self, channel: u8, program: u8) {
            self.events
                .push(MidiEvent::ProgramChange { channel, program });
        }

        fn pitch_bend(&mut self, channel: u8, value: i16) {
            self.events.push(MidiEvent::PitchBend { channel, value });
        }
    }

    fn feed(bytes: &[u8]) -> Vec<MidiEvent> {
        let mut dispatcher = MidiDispatcher::new(Recorder::default());
        dispatcher.read_all(bytes);
        dispatcher.into_handler().events
    }

    #[test]
    fn note_on_dispatches_once() {
        assert_eq!(
            feed(&[0x90, 0x40, 0x7F]),
            vec![MidiEvent::Note {
                channel: 0,
                key: 64,
                velocity: 127
            }]
        );
    }

    #[test]
    fn note_off_forces_zero_velocity() {
        assert_eq!(
            feed(&[0x83, 0x40, 0x55]),
            vec![MidiEvent::Note {
                channel: 3,
                key: 64,
                velocity: 0
            }]
        );
    }

    #[test]
    fn new_status_discards_partial_message() {
        assert_eq!(
            feed(&[0x90, 0x40, 0x90, 0x3C, 0x7F]),
            vec![MidiEvent::Note {
                channel: 0,
                key: 60,
                velocity: 127
            }]
        );
    }

    #[test]
    fn running_status_repeats_last_type() {
        let events = feed(&[0x91, 0x3C, 0x64, 0x40, 0x00, 0xC2, 0x05, 0x06]);
        assert_eq!(
            events,
            vec![
                MidiEvent::Note {
                    channel: 1,
                    key: 60,
                    velocity: 100
                },
                MidiEvent::Note {
                    channel: 1,
                    key: 64,
                    velocity: 0
                },
                MidiEvent::ProgramChange {
                    channel: 2,
                    program: 5
                },
                MidiEvent::ProgramChange {
                    channel: 2,
                    program: 6
                },
            ]
        );
    }

    #[test]
    fn sysex_body_is_ignored() {
        let events = feed(&[0xF0, 0x7E, 0x00, 0x09, 0x01, 0xF7, 0x10, 0xB0, 0x4A, 0x20]);
        assert_eq!(
            events,
            vec![MidiEvent::ControlChange {
                channel: 0,
                controller: 74,
                value: 32
            }]
        );
    }

    #[test]
    fn data_before_any_status_is_dropped() {
        assert!(feed(&[0x40, 0x7F, 0x12]).is_empty());
    }

    #[test]
    fn pitch_bend_combines_lsb_first() {
        assert_eq!(
            feed(&[0xE0, 0x00, 0x40, 0xE0, 0x7F, 0x7F, 0xE0, 0x00, 0x00]),
            vec![
                MidiEvent::PitchBend {
                    channel: 0,
                    value: 0
                },
                MidiEvent::PitchBend {
                    channel: 0,
                    value: 8191
                },
                MidiEvent::PitchBend {
                    channel: 0,
                    value: -8192
                },
            ]
        );
    }

    #[test]
    fn unhandled_categories_are_dropped() {
        // Recorder has no poly/channel pressure handler
        assert!(feed(&[0xA0, 0x40, 0x10, 0xD0, 0x22]).is_empty());
    }

    static NOTES: AtomicU32 = AtomicU32::new(0);

    fn count_note(_channel: u8, key: u8, velocity: u8) {
        NOTES.fetch_add(u32::from(key) + u32::from(velocity), Ordering::Relaxed);
    }

    #[test]
    fn callback_slots_are_optional() {
        let mut dispatcher = MidiDispatcher::new(Callbacks {
            note: Some(count_note),
            ..Callbacks::default()
        });
        dispatcher.read_all(&[0x90, 0x01, 0x02, 0xB0, 0x07, 0x7F, 0x80, 0x03, 0x7F]);
        assert_eq!(NOTES.load(Ordering::Relaxed), 1 + 2 + 3);
    }

    #[test]
    fn parser_yields_events_directly() {
        let mut parser = MidiParser::new();
        assert_eq!(parser.read(0xB5), None);
        assert_eq!(parser.status(), 0xB0);
        assert_eq!(parser.channel(), 5);
        assert_eq!(parser.read(0x01), None);
        assert_eq!(
            parser.read(0x40),
            Some(MidiEvent::ControlChange {
                channel: 5,
                controller: 1,
                value: 64
            })
        );
    }
}
