//! fixsynth - render or play the fixed-point synth voice
//!
//! Run with: cargo run -- render patch.json song.mid.raw 96000 out.raw
//!       or: cargo run -- play [patch.json]

mod play;
mod render;

use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgMatches, Command};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use fixsynth::EngineConfig;
use tracing_subscriber::EnvFilter;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("fixsynth")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fixed-point monophonic synth voice")
        .subcommand_required(true)
        .subcommand(
            Command::new("render")
                .about("Render raw MIDI bytes to unsigned 16-bit little-endian samples")
                .arg(Arg::new("config").required(true).value_parser(value_parser!(PathBuf)))
                .arg(Arg::new("midi").required(true).value_parser(value_parser!(PathBuf)))
                .arg(Arg::new("ticks").required(true).value_parser(value_parser!(usize)))
                .arg(Arg::new("out").required(true).value_parser(value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("play")
                .about("Play the voice live from the computer keyboard")
                .arg(Arg::new("config").value_parser(value_parser!(PathBuf))),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", args)) => {
            let config = load_config(required::<PathBuf>(args, "config")?)?;
            let midi = required::<PathBuf>(args, "midi")?;
            let ticks = *required::<usize>(args, "ticks")?;
            let out = required::<PathBuf>(args, "out")?;
            render::run(&config, midi, ticks, out)
        }
        Some(("play", args)) => {
            let config = match args.get_one::<PathBuf>("config") {
                Some(path) => load_config(path)?,
                None => EngineConfig::default(),
            };
            play::run(config)
        }
        Some((other, _)) => Err(eyre!("unknown command {other}")),
        None => Err(eyre!("no command given")),
    }
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    args: &'a ArgMatches,
    name: &str,
) -> EyreResult<&'a T> {
    args.get_one::<T>(name)
        .ok_or_else(|| eyre!("missing argument <{name}>"))
}

fn load_config(path: &Path) -> EyreResult<EngineConfig> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .wrap_err_with(|| format!("failed to parse config {}", path.display()))?;
    config.validate()?;
    tracing::info!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
