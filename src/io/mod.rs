// Purpose - the boundary with hardware: tick source in, samples out, MIDI bytes in

pub mod midi;

/// Paces the render chain: one `tick()` per audio sample period.
///
/// On hardware this is the timer or conversion-complete interrupt. In tests
/// and offline rendering it is a plain counter.
pub trait TickSource {
    /// Wait for the next sample period. Returns `false` once the source is
    /// exhausted.
    fn tick(&mut self) -> bool;
}

/// Accepts one finished sample per tick (the DAC).
pub trait SampleSink {
    fn write(&mut self, sample: u16);
}

/// Software tick source that fires a fixed number of times.
#[derive(Debug, Clone, Copy)]
pub struct CountedTicks {
    remaining: usize,
}

impl CountedTicks {
    pub fn new(ticks: usize) -> Self {
        Self { remaining: ticks }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl TickSource for CountedTicks {
    fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// In-memory capture.
impl SampleSink for Vec<u16> {
    fn write(&mut self, sample: u16) {
        self.push(sample);
    }
}

impl<S: SampleSink + ?Sized> SampleSink for &mut S {
    fn write(&mut self, sample: u16) {
        (**self).write(sample)
    }
}
