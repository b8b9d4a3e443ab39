//! Offline rendering: a MIDI byte file in, raw samples out.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use fixsynth::{
    io::{midi::MidiDispatcher, SampleSink, TickSource},
    synth::{Engine, NoMessages, ParamWriter, SharedParams},
    EngineConfig,
};

/// Serial MIDI runs at 31250 baud with 10 bits per byte.
const MIDI_BYTES_PER_SECOND: u32 = 3_125;

/// Tick source that also plays the role of the UART: bytes from the file are
/// handed to the dispatcher at wire speed, in step with the sample clock.
struct MidiFeed<'a, 'p> {
    bytes: &'a [u8],
    dispatcher: MidiDispatcher<ParamWriter<'p>>,
    sample_rate: u32,
    accumulator: u32,
    remaining: usize,
}

impl TickSource for MidiFeed<'_, '_> {
    fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;

        self.accumulator += MIDI_BYTES_PER_SECOND;
        while self.accumulator >= self.sample_rate {
            self.accumulator -= self.sample_rate;
            if let Some((&byte, rest)) = self.bytes.split_first() {
                self.dispatcher.read(byte);
                self.bytes = rest;
            }
        }
        true
    }
}

/// Little-endian u16 writer. The first I/O error is kept and reported after
/// the run, since `SampleSink::write` cannot fail.
struct FileSink {
    out: BufWriter<File>,
    error: Option<io::Error>,
}

impl SampleSink for FileSink {
    fn write(&mut self, sample: u16) {
        if self.error.is_none() {
            if let Err(err) = self.out.write_all(&sample.to_le_bytes()) {
                self.error = Some(err);
            }
        }
    }
}

pub fn run(config: &EngineConfig, midi: &Path, ticks: usize, out: &Path) -> EyreResult<()> {
    let bytes = std::fs::read(midi)
        .wrap_err_with(|| format!("failed to read MIDI bytes from {}", midi.display()))?;
    let file = File::create(out).wrap_err_with(|| format!("failed to create {}", out.display()))?;

    let params = SharedParams::new();
    let mut engine = Engine::new(config, &params, NoMessages)?;
    let mut feed = MidiFeed {
        bytes: &bytes,
        dispatcher: MidiDispatcher::new(ParamWriter::new(
            &params,
            config.midi_channel,
            config.cutoff_controller,
        )),
        sample_rate: config.sample_rate,
        accumulator: 0,
        remaining: ticks,
    };
    let mut sink = FileSink {
        out: BufWriter::new(file),
        error: None,
    };

    let written = engine.run(&mut feed, &mut sink);
    if let Some(err) = sink.error.take() {
        return Err(err).wrap_err_with(|| format!("failed writing {}", out.display()));
    }
    sink.out.flush()?;

    let unread = feed.bytes.len();
    if unread > 0 {
        tracing::warn!(unread, "render ended before all MIDI bytes were read");
    }
    tracing::info!(samples = written, path = %out.display(), "render complete");
    Ok(())
}
