use crate::{
    config::EngineConfig,
    dsp::pitch::{bend_increment, note_increment},
    error::ConfigError,
    io::{SampleSink, TickSource},
    synth::{
        message::{MessageReceiver, NoMessages},
        params::{LiveParams, SharedParams},
        voice::Voice,
    },
};

/// Tick-side half of the synth.
///
/// Each `tick()` drains pending control messages, picks up the latest
/// published [`LiveParams`], and renders one sample. Only fields that changed
/// since the previous tick touch the voice, so a held note is not retriggered
/// by an unrelated controller move.
///
/// Gating is legato. The envelope is gated only when the published gate bit
/// flips, so a new key pressed over a held one slides the pitch without
/// re-entering Attack. A note-off and note-on published between two ticks
/// leave the gate high and are likewise heard as a legato pitch change.
pub struct Engine<'a, R = NoMessages> {
    voice: Voice,
    params: &'a SharedParams,
    rx: R,
    applied: LiveParams,
    sample_rate: u32,
}

impl<'a, R: MessageReceiver> Engine<'a, R> {
    pub fn new(config: &EngineConfig, params: &'a SharedParams, rx: R) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(
            sample_rate = config.sample_rate,
            waveform = ?config.waveform,
            filter = ?config.filter.kind,
            "engine configured"
        );

        let applied = params.load();
        let mut voice = Voice::new(config);
        voice.set_increment(Self::increment(applied, config.sample_rate));
        voice.set_cutoff(applied.cutoff);
        voice.set_velocity(applied.velocity);
        if applied.gate {
            voice.gate(true);
        }

        Ok(Self {
            voice,
            params,
            rx,
            applied,
            sample_rate: config.sample_rate,
        })
    }

    fn increment(params: LiveParams, sample_rate: u32) -> i16 {
        bend_increment(note_increment(params.note, sample_rate), params.bend)
    }

    /// Produce the next sample.
    #[inline]
    pub fn tick(&mut self) -> u16 {
        while let Some(msg) = self.rx.pop() {
            self.voice.apply(msg);
        }

        let live = self.params.load();
        if live != self.applied {
            self.update(live);
        }
        self.voice.render()
    }

    fn update(&mut self, live: LiveParams) {
        let prev = self.applied;
        if live.note != prev.note || live.bend != prev.bend {
            self.voice.set_increment(Self::increment(live, self.sample_rate));
        }
        if live.cutoff != prev.cutoff {
            self.voice.set_cutoff(live.cutoff);
        }
        if live.velocity != prev.velocity {
            self.voice.set_velocity(live.velocity);
        }
        if live.gate != prev.gate {
            self.voice.gate(live.gate);
        }
        self.applied = live;
    }

    /// Render one sample per tick until `ticks` runs dry. Returns the number
    /// of samples written.
    pub fn run<T, S>(&mut self, ticks: &mut T, sink: &mut S) -> usize
    where
        T: TickSource + ?Sized,
        S: SampleSink + ?Sized,
    {
        let mut written = 0;
        while ticks.tick() {
            sink.write(self.tick());
            written += 1;
        }
        written
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::EnvelopeConfig,
        dsp::envelope::EnvelopeState,
        io::CountedTicks,
        synth::message::ControlMessage,
    };

    struct Script(Vec<ControlMessage>);

    impl MessageReceiver for Script {
        fn pop(&mut self) -> Option<ControlMessage> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    fn config() -> EngineConfig {
        EngineConfig {
            sample_rate: 48_000,
            envelope: EnvelopeConfig::Coarse {
                attack_rate: 0x1000,
                release_rate: 0x1000,
            },
            ..EngineConfig::default()
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let params = SharedParams::new();
        let bad = EngineConfig {
            sample_rate: 0,
            ..config()
        };
        assert!(matches!(
            Engine::new(&bad, &params, NoMessages),
            Err(ConfigError::ZeroSampleRate)
        ));
    }

    #[test]
    fn run_writes_one_sample_per_tick() {
        let params = SharedParams::new();
        let mut engine = Engine::new(&config(), &params, NoMessages).unwrap();
        let mut out: Vec<u16> = Vec::new();
        assert_eq!(engine.run(&mut CountedTicks::new(100), &mut out), 100);
        assert_eq!(out.len(), 100);
        assert!(out.iter().all(|&s| s == 0x8000));
    }

    #[test]
    fn published_gate_reaches_the_voice() {
        let params = SharedParams::new();
        let mut engine = Engine::new(&config(), &params, NoMessages).unwrap();
        engine.tick();
        assert_eq!(engine.voice().envelope_state(), EnvelopeState::Idle);

        params.store(LiveParams {
            gate: true,
            ..LiveParams::default()
        });
        engine.tick();
        assert_eq!(engine.voice().envelope_state(), EnvelopeState::Attack);

        for _ in 0..16 {
            engine.tick();
        }
        assert_eq!(engine.voice().envelope_state(), EnvelopeState::Sustain);

        params.store(LiveParams::default());
        engine.tick();
        assert_eq!(engine.voice().envelope_state(), EnvelopeState::Release);
    }

    #[test]
    fn overlapping_notes_are_legato() {
        let params = SharedParams::new();
        let mut engine = Engine::new(&config(), &params, NoMessages).unwrap();
        params.store(LiveParams {
            gate: true,
            note: 60,
            ..LiveParams::default()
        });
        for _ in 0..17 {
            engine.tick();
        }
        assert_eq!(engine.voice().envelope_state(), EnvelopeState::Sustain);

        params.store(LiveParams {
            gate: true,
            note: 67,
            ..LiveParams::default()
        });
        engine.tick();
        assert_eq!(engine.voice().envelope_state(), EnvelopeState::Sustain);
    }

    #[test]
    fn gate_already_set_at_construction() {
        let params = SharedParams::new();
        params.store(LiveParams {
            gate: true,
            ..LiveParams::default()
        });
        let mut engine = Engine::new(&config(), &params, NoMessages).unwrap();
        engine.tick();
        assert_eq!(engine.voice().envelope_state(), EnvelopeState::Attack);
    }

    #[test]
    fn control_messages_drain_before_render() {
        let params = SharedParams::new();
        let script = Script(vec![
            ControlMessage::SetAttack(0xFFFF),
            ControlMessage::ResetPhase,
        ]);
        params.store(LiveParams {
            gate: true,
            ..LiveParams::default()
        });
        let mut engine = Engine::new(&config(), &params, script).unwrap();

        // the attack rate lands before the first render, which then saturates
        engine.tick();
        assert_eq!(engine.voice().envelope_state(), EnvelopeState::Sustain);
    }
}
