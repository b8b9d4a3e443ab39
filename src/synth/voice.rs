use crate::{
    config::EngineConfig,
    dsp::{
        envelope::{Envelope, EnvelopeState},
        filter::OnePole,
        fixed::{qmul_u16, qmul_us16},
        oscillator::Oscillator,
        table::LookupTable,
    },
    synth::message::ControlMessage,
    tables::EXP1000_U16X1024,
};

/// Offset between unipolar samples and their signed, centered form.
const CENTER: u16 = 0x8000;

/// One monophonic voice: oscillator, envelope and low-pass filter.
///
/// Everything here runs in the tick; no method allocates or blocks.
#[derive(Debug, Clone)]
pub struct Voice {
    osc: Oscillator,
    env: Envelope,
    filter: OnePole,
    /// Maps the 7-bit cutoff controller onto an exponential coefficient curve.
    cutoff_curve: LookupTable,
    cutoff: u8,
    gain: u16,
}

impl Voice {
    pub fn new(config: &EngineConfig) -> Self {
        let mut voice = Self {
            osc: Oscillator::new(config.waveform),
            env: config.envelope.build(),
            filter: OnePole::new(config.filter.kind, config.filter.coefficient),
            cutoff_curve: LookupTable::with_scale(&EXP1000_U16X1024, config.filter.coefficient),
            cutoff: 127,
            gain: u16::MAX,
        };
        voice.set_cutoff(127);
        voice
    }

    pub fn gate(&mut self, on: bool) {
        self.env.gate(on);
    }

    pub fn set_increment(&mut self, increment: i16) {
        self.osc.set_increment(increment);
    }

    /// Set the filter coefficient from a 0..=127 controller value.
    pub fn set_cutoff(&mut self, cc: u8) {
        let cc = cc & 0x7F;
        self.cutoff = cc;
        let idx = usize::from(cc) << 3 | usize::from(cc) >> 4;
        self.filter.set_coefficient(self.cutoff_curve.lookup_scaled(idx));
    }

    /// Set output gain from a 1..=127 note velocity; 127 is unity.
    pub fn set_velocity(&mut self, velocity: u8) {
        let v = u16::from(velocity & 0x7F);
        self.gain = v << 9 | v << 2 | v >> 5;
    }

    pub fn apply(&mut self, msg: ControlMessage) {
        match msg {
            ControlMessage::SetAttack(amount) => self.env.set_attack(amount),
            ControlMessage::SetRelease(amount) => self.env.set_release(amount),
            ControlMessage::SetSustainLevel(level) => self.env.set_sustain_level(level),
            ControlMessage::SetFilterKind(kind) => self.filter.set_kind(kind),
            ControlMessage::SetCutoffScale(scale) => {
                self.cutoff_curve.set_scale(scale);
                self.set_cutoff(self.cutoff);
            }
            ControlMessage::SetEnvelope(config) => self.env = config.build(),
            ControlMessage::ResetPhase => self.osc.reset_phase(),
        }
    }

    /// Render one unipolar sample. Silence is `0x8000`.
    #[inline]
    pub fn render(&mut self) -> u16 {
        let filtered = self.filter.process(self.osc.render());
        let level = qmul_u16(self.env.render(), self.gain);
        let centered = (filtered ^ CENTER) as i16;
        (qmul_us16(level, centered) as u16) ^ CENTER
    }

    pub fn envelope_state(&self) -> EnvelopeState {
        self.env.state()
    }

    pub fn is_active(&self) -> bool {
        self.env.is_active()
    }

    pub fn filter(&self) -> &OnePole {
        &self.filter
    }
}
