pub mod config;
pub mod dsp;
pub mod error;
pub mod io; // Tick source, sample sink, MIDI input
pub mod synth; // Parameter handoff and the render engine
pub mod tables;

pub use config::EngineConfig;
pub use error::ConfigError;
