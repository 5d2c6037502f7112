//! `enigma` command line front end.
//!
//! Builds one machine from a JSON key sheet and/or flags, then encodes the
//! message argument or, without one, every line of stdin in sequence on
//! the same machine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use enigma::{Machine, MachineConfig};

#[derive(Parser, Debug)]
#[command(name = "enigma", version, about = "Rotor cipher machine simulator")]
struct Args {
    /// JSON key sheet (keys: rotors, reflector, ringSettings, positions, plugboard).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rotor order, left-to-right, e.g. I,II,III
    #[arg(long, value_delimiter = ',')]
    rotors: Option<Vec<String>>,

    /// Reflector type: A, B or C.
    #[arg(long)]
    reflector: Option<String>,

    /// Ring settings 1-26, left-to-right, e.g. 1,1,1
    #[arg(long, value_delimiter = ',')]
    rings: Option<Vec<u8>>,

    /// Initial window letters, left-to-right, e.g. AAA
    #[arg(long)]
    positions: Option<String>,

    /// Plugboard lead, e.g. --plug AB --plug CD
    #[arg(long = "plug")]
    plugs: Vec<String>,

    /// Print the final rotor positions after the output.
    #[arg(long)]
    show_positions: bool,

    /// Message to encode. Reads stdin line by line when omitted.
    message: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let mut machine = Machine::new(&config).context("invalid machine configuration")?;

    match &args.message {
        Some(message) => {
            let output = machine
                .encode_message(message)
                .with_context(|| format!("cannot encode {:?}", message))?;
            println!("{}", output);
        }
        None => encode_stdin(&mut machine)?,
    }

    if args.show_positions {
        println!("{}", machine.positions_string());
    }
    Ok(())
}

/// Loads the key sheet, then lets individual flags override it.
fn build_config(args: &Args) -> Result<MachineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            MachineConfig::from_json(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => MachineConfig::default(),
    };

    if let Some(rotors) = &args.rotors {
        config.rotors = rotors.clone();
    }
    if let Some(reflector) = &args.reflector {
        config.reflector = reflector.clone();
    }
    if let Some(rings) = &args.rings {
        config.ring_settings = Some(rings.clone());
    }
    if let Some(positions) = &args.positions {
        config.positions = Some(positions.clone());
    }
    if !args.plugs.is_empty() {
        config.plugboard = args.plugs.clone();
    }
    Ok(config)
}

/// Encodes stdin one line at a time; the machine state carries over.
fn encode_stdin(machine: &mut Machine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let text: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        match machine.encode_message(&text) {
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(err) => warn!(line = lineno + 1, %err, "line rejected"),
        }
    }
    Ok(())
}
