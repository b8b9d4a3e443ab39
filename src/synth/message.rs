//! Control-rate messages from the main loop to the tick.
//!
//! Anything too wide for the packed [`LiveParams`] word travels here, over a
//! single-producer single-consumer ring. The tick drains the ring before
//! rendering, so a message takes effect on the next sample at the latest.
//!
//! [`LiveParams`]: crate::synth::params::LiveParams

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{config::EnvelopeConfig, dsp::filter::FilterKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlMessage {
    /// Attack rate (coarse) or length in ticks (precise).
    SetAttack(u32),
    /// Release rate (coarse) or length in ticks (precise).
    SetRelease(u32),
    SetSustainLevel(u32),
    SetFilterKind(FilterKind),
    /// Coefficient at full cutoff controller.
    SetCutoffScale(u16),
    /// Swap envelope design. The new envelope starts idle.
    SetEnvelope(EnvelopeConfig),
    ResetPhase,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}

/// Receiver for engines that are configured once and never adjusted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMessages;

impl MessageReceiver for NoMessages {
    fn pop(&mut self) -> Option<ControlMessage> {
        None
    }
}

/// Main-loop end of the control queue.
#[cfg(feature = "rtrb")]
pub struct ControlSender {
    tx: Producer<ControlMessage>,
}

#[cfg(feature = "rtrb")]
impl ControlSender {
    /// Queue `msg`. Returns `false` and drops it if the tick has fallen behind.
    pub fn send(&mut self, msg: ControlMessage) -> bool {
        match self.tx.push(msg) {
            Ok(()) => true,
            Err(_) => {
                tracing::warn!(?msg, "control queue full, dropping message");
                false
            }
        }
    }

    pub fn slots(&self) -> usize {
        self.tx.slots()
    }
}

/// Create a control queue with room for `capacity` pending messages.
#[cfg(feature = "rtrb")]
pub fn control_channel(capacity: usize) -> (ControlSender, Consumer<ControlMessage>) {
    let (tx, rx) = RingBuffer::new(capacity);
    (ControlSender { tx }, rx)
}
