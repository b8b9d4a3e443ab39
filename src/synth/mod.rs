// Purpose - the monophonic synth: MIDI-side parameter publishing, the control
// queue, and the tick-side engine that renders the voice

pub mod engine;
pub mod message;
pub mod params;
pub mod voice;

pub use engine::Engine;
#[cfg(feature = "rtrb")]
pub use message::{control_channel, ControlSender};
pub use message::{ControlMessage, MessageReceiver, NoMessages};
pub use params::{LiveParams, ParamWriter, SharedParams};
pub use voice::Voice;
