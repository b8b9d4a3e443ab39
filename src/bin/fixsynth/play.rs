//! Live playback: the audio callback is the tick, the keyboard is the MIDI port.

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal,
};
use fixsynth::{
    dsp::FilterKind,
    io::midi::MidiDispatcher,
    synth::{
        control_channel, params::ALL_NOTES_OFF, ControlMessage, ControlSender, Engine, ParamWriter,
        SharedParams,
    },
    EngineConfig,
};

/// Published by the keyboard loop, read by the audio callback.
static SHARED: SharedParams = SharedParams::new();

/// Piano layout on the home row, starting at C.
const KEYS: &str = "awsedftgyhujk";

const CONTROL_QUEUE: usize = 64;

/// Restores the terminal however the loop exits.
struct RawMode;

impl RawMode {
    fn enable() -> EyreResult<Self> {
        terminal::enable_raw_mode().wrap_err("failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Turns key presses into MIDI bytes and control messages.
struct Keyboard {
    midi: MidiDispatcher<ParamWriter<'static>>,
    control: ControlSender,
    channel: u8,
    cutoff_controller: u8,
    octave: u8,
    cutoff: u8,
    sounding: Option<u8>,
}

impl Keyboard {
    fn channel_message(&mut self, status: u8, data: [u8; 2]) {
        self.midi.read(status | self.channel);
        self.midi.read_all(&data);
    }

    fn press(&mut self, semitone: u8) {
        let key = (self.octave * 12 + semitone).min(127);
        self.channel_message(0x90, [key, 100]);
        self.sounding = Some(key);
    }

    /// Terminals report presses but not releases, so every key pressed so
    /// far is still held as far as the synth knows. Let go of all of them.
    fn release(&mut self) {
        self.sounding = None;
        self.channel_message(0xB0, [ALL_NOTES_OFF, 0]);
    }

    /// Note off for the most recent key only; falls back to the key before.
    fn release_last(&mut self) {
        if let Some(key) = self.sounding.take() {
            self.channel_message(0x80, [key, 0]);
        }
    }

    fn nudge_cutoff(&mut self, up: bool) {
        self.cutoff = if up {
            (self.cutoff + 8).min(127)
        } else {
            self.cutoff.saturating_sub(8)
        };
        self.channel_message(0xB0, [self.cutoff_controller, self.cutoff]);
    }

    fn bend(&mut self, value: u16) {
        self.channel_message(0xE0, [(value & 0x7F) as u8, (value >> 7) as u8]);
    }

    /// Returns `false` when the user asks to quit.
    fn handle(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return false,
            KeyCode::Char(' ') => self.release(),
            KeyCode::Char('z') => self.octave = self.octave.saturating_sub(1),
            KeyCode::Char('x') => self.octave = (self.octave + 1).min(9),
            KeyCode::Char('-') => self.nudge_cutoff(false),
            KeyCode::Char('=') => self.nudge_cutoff(true),
            KeyCode::Char(',') => self.bend(0x0000),
            KeyCode::Char('.') => self.bend(0x2000),
            KeyCode::Char('/') => self.bend(0x3FFF),
            KeyCode::Backspace => self.release_last(),
            KeyCode::Char('r') => {
                self.control.send(ControlMessage::ResetPhase);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let kind = match c {
                    '1' => FilterKind::Exponential,
                    '2' => FilterKind::ExponentialLf,
                    '3' => FilterKind::Trapezoid,
                    _ => FilterKind::TrapezoidLf,
                };
                tracing::debug!(?kind, "switching filter");
                self.control.send(ControlMessage::SetFilterKind(kind));
            }
            KeyCode::Char(c) => {
                if let Some(semitone) = KEYS.find(c) {
                    self.press(semitone as u8);
                }
            }
            _ => {}
        }
        true
    }
}

pub fn run(mut config: EngineConfig) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let stream_config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    // the device clock is the tick
    config.sample_rate = stream_config.sample_rate().0;
    let channels = usize::from(stream_config.channels());
    tracing::info!(sample_rate = config.sample_rate, channels, "audio device opened");

    let (control, rx) = control_channel(CONTROL_QUEUE);
    let mut engine = Engine::new(&config, &SHARED, rx)?;

    let stream = device.build_output_stream(
        &stream_config.into(),
        move |data: &mut [f32], _| {
            for frame in data.chunks_mut(channels) {
                let sample = (f32::from(engine.tick()) - 32768.0) / 32768.0;
                frame.fill(sample);
            }
        },
        |err| tracing::error!(%err, "audio stream error"),
        None,
    )?;
    stream.play()?;

    let mut keyboard = Keyboard {
        midi: MidiDispatcher::new(ParamWriter::new(
            &SHARED,
            config.midi_channel,
            config.cutoff_controller,
        )),
        control,
        channel: config.midi_channel.unwrap_or(0),
        cutoff_controller: config.cutoff_controller,
        octave: 5,
        cutoff: 127,
        sounding: None,
    };

    println!("=== fixsynth ===");
    println!("keys: {KEYS} play, space release all, backspace release last");
    println!("      z/x octave, -/= cutoff, , . / bend, 1-4 filter, r reset phase, q quit");

    let _raw = RawMode::enable()?;
    loop {
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !keyboard.handle(key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}
