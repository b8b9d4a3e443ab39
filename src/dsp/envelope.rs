//! Attack/sustain/release envelope generators.

/*
ASR Envelopes
=============

Two linear attack/sustain/release generators with different cost/precision
trade-offs. Both run once per sample and never allocate.

Vocabulary
----------

  value       The envelope's current output. Full scale is the type's max.

  state       Idle, Attack, Sustain, or Release.

  gate        Note on/off. Gate high always (re)enters Attack; gate low always
              enters Release. Both start from the CURRENT value, so a retrigger
              during release ramps up from wherever the release had got to.

  rate        (Asr16) How much `value` moves per sample.

  length      (Asr32) How many samples a segment lasts.

  slope       (Asr32) Per-sample step, derived on segment entry from the
              distance left to travel and the segment's length.


The State Machine
-----------------

                gate(true)                   overflow / end of segment
    ┌──────┐  ───────────→  ┌────────┐  ─────────────────────────→  ┌─────────┐
    │ Idle │                │ Attack │                               │ Sustain │
    └──────┘  ←───────────  └────────┘                               └─────────┘
        ↑      underflow /       │ gate(false)                            │
        │      end of segment    ↓                                        │
        │                   ┌─────────┐        gate(false)                │
        └────────────────── │ Release │ ←─────────────────────────────────┘
                            └─────────┘


Asr16: Accumulate Until It Overflows
------------------------------------

Attack adds `attack_rate` each sample. When the sum would pass 0xFFFF the
value pins to 0xFFFF and we're in Sustain. Release subtracts `release_rate`
until it would pass zero, then pins to 0 and goes Idle. The segment time is
whatever `0xFFFF / rate` works out to, and a rate of zero simply never
finishes. Cheap, coarse.


Asr32: Count Samples, Interpolate
---------------------------------

Each segment knows its length up front. On entry:

    slope = (target - value) / length
    phase = 0

Each sample adds `slope`. When `phase` reaches `length - 1` the segment's last
sample lands exactly on the target (the integer remainder of the division is
absorbed there) and the next state begins. Because the slope is derived from
the REMAINING distance, a segment lasts exactly `length` samples no matter
where it started from.

    value
      S ┤        ●━━━━━━━━━━━━━━━━
        │      ●                  ●
        │    ●                      ●
        │  ●                          ●
      0 ●─┬─┬─┬─┬─────────────────┬─┬─┬─┬──→ samples
          1 2 3 4                 1 2 3 4
          attack_length = 4       release_length = 4
*/

/// The current stage of an envelope's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeState {
    #[default]
    Idle,
    Attack,
    Sustain,
    Release,
}

/// Coarse accumulator envelope: rates, not durations.
#[derive(Debug, Clone)]
pub struct Asr16 {
    state: EnvelopeState,
    value: u16,

    pub attack_rate: u16,
    pub release_rate: u16,
}

impl Asr16 {
    pub fn new(attack_rate: u16, release_rate: u16) -> Self {
        Self {
            state: EnvelopeState::Idle,
            value: 0,
            attack_rate,
            release_rate,
        }
    }

    pub fn gate(&mut self, on: bool) {
        self.state = if on {
            EnvelopeState::Attack
        } else {
            EnvelopeState::Release
        };
    }

    /// Advance one sample and return the new value.
    #[inline]
    pub fn render(&mut self) -> u16 {
        match self.state {
            EnvelopeState::Idle | EnvelopeState::Sustain => {}

            // a zero rate holds the segment open even when already at the rail
            EnvelopeState::Attack if self.attack_rate == 0 => {}
            EnvelopeState::Release if self.release_rate == 0 => {}

            EnvelopeState::Attack => match self.value.checked_add(self.attack_rate) {
                Some(next) if next < u16::MAX => self.value = next,
                _ => {
                    self.value = u16::MAX;
                    self.state = EnvelopeState::Sustain;
                }
            },

            EnvelopeState::Release => match self.value.checked_sub(self.release_rate) {
                Some(next) if next > 0 => self.value = next,
                _ => {
                    self.value = 0;
                    self.state = EnvelopeState::Idle;
                }
            },
        }
        self.value
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn state(&self) -> EnvelopeState {
        self.state
    }
}

impl Default for Asr16 {
    fn default() -> Self {
        Self::new(0x7FFF, 0x7FFF)
    }
}

/// Segment length used for the open-ended Idle and Sustain states.
const FOREVER: u32 = u32::MAX;

/// Slope-interpolating envelope with exact segment lengths.
#[derive(Debug, Clone)]
pub struct Asr32 {
    state: EnvelopeState,
    value: u32,
    slope: i64,
    phase: u32,
    len: u32,

    attack_length: u32,
    release_length: u32,
    sustain_level: u32,
}

impl Asr32 {
    /// Lengths are in samples; zero is treated as one.
    pub fn new(attack_length: u32, release_length: u32, sustain_level: u32) -> Self {
        Self {
            state: EnvelopeState::Idle,
            value: 0,
            slope: 0,
            phase: 0,
            len: FOREVER,
            attack_length: attack_length.max(1),
            release_length: release_length.max(1),
            sustain_level,
        }
    }

    pub fn gate(&mut self, on: bool) {
        if on {
            self.enter(EnvelopeState::Attack, self.sustain_level, self.attack_length);
        } else {
            self.enter(EnvelopeState::Release, 0, self.release_length);
        }
    }

    fn enter(&mut self, state: EnvelopeState, target: u32, len: u32) {
        let distance = i64::from(target) - i64::from(self.value);
        self.slope = distance / i64::from(len);
        self.phase = 0;
        self.len = len;
        self.state = state;
    }

    fn hold(&mut self, state: EnvelopeState, value: u32) {
        self.state = state;
        self.value = value;
        self.slope = 0;
        self.len = FOREVER;
    }

    /// Advance one sample and return the new value.
    #[inline]
    pub fn render(&mut self) -> u32 {
        let last = self.phase.saturating_add(1) >= self.len;
        match self.state {
            EnvelopeState::Attack if last => self.hold(EnvelopeState::Sustain, self.sustain_level),
            EnvelopeState::Release if last => self.hold(EnvelopeState::Idle, 0),
            _ => self.value = (i64::from(self.value) + self.slope) as u32,
        }
        self.phase = self.phase.saturating_add(1);
        self.value
    }

    pub fn set_attack_length(&mut self, samples: u32) {
        self.attack_length = samples.max(1);
    }

    pub fn set_release_length(&mut self, samples: u32) {
        self.release_length = samples.max(1);
    }

    /// Takes effect on the next `gate(true)`.
    pub fn set_sustain_level(&mut self, level: u32) {
        self.sustain_level = level;
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn state(&self) -> EnvelopeState {
        self.state
    }

    pub fn slope(&self) -> i64 {
        self.slope
    }
}

impl Default for Asr32 {
    fn default() -> Self {
        Self::new(64, 4096, u32::MAX)
    }
}

/// Per-voice choice of envelope design.
#[derive(Debug, Clone)]
pub enum Envelope {
    Coarse(Asr16),
    Precise(Asr32),
}

impl Envelope {
    pub fn gate(&mut self, on: bool) {
        match self {
            Envelope::Coarse(env) => env.gate(on),
            Envelope::Precise(env) => env.gate(on),
        }
    }

    /// Advance one sample; the result is normalized to UQ16.
    #[inline]
    pub fn render(&mut self) -> u16 {
        match self {
            Envelope::Coarse(env) => env.render(),
            Envelope::Precise(env) => (env.render() >> 16) as u16,
        }
    }

    pub fn state(&self) -> EnvelopeState {
        match self {
            Envelope::Coarse(env) => env.state(),
            Envelope::Precise(env) => env.state(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() != EnvelopeState::Idle
    }

    /// Attack speed: a rate for `Coarse`, a length in samples for `Precise`.
    pub fn set_attack(&mut self, amount: u32) {
        match self {
            Envelope::Coarse(env) => env.attack_rate = amount.min(u32::from(u16::MAX)) as u16,
            Envelope::Precise(env) => env.set_attack_length(amount),
        }
    }

    /// Release speed: a rate for `Coarse`, a length in samples for `Precise`.
    pub fn set_release(&mut self, amount: u32) {
        match self {
            Envelope::Coarse(env) => env.release_rate = amount.min(u32::from(u16::MAX)) as u16,
            Envelope::Precise(env) => env.set_release_length(amount),
        }
    }

    /// Coarse envelopes always sustain at full scale.
    pub fn set_sustain_level(&mut self, level: u32) {
        if let Envelope::Precise(env) = self {
            env.set_sustain_level(level);
        }
    }
}
