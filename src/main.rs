//! Command line driver
//!
//! Thin shell over the library: builds one machine from a JSON description
//! (or a model's factory defaults), enciphers stdin to stdout, and logs the
//! final rotor positions. Settings files are just `MachineConfig` in serde
//! form; their storage is the caller's concern, not the core's.

use std::io::Read;
use std::process::ExitCode;

use enigma_core::{Machine, MachineConfig, MachineModel};

const USAGE: &str = "\
Usage: enigma-core [--model <name>] [--config <path>]

Reads text on stdin, writes the enciphered tape to stdout. Letters are
enciphered (lowercase is uppercased first); everything else passes through.

Options:
  --model <name>    factory defaults for a model: I, M3, M4, Norway,
                    SwissK, Railway (default: I)
  --config <path>   JSON machine description (overrides --model)
";

fn parse_config() -> Result<MachineConfig, String> {
    let mut config: Option<MachineConfig> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--model" => {
                let name = args.next().ok_or("--model needs a value")?;
                let model: MachineModel = name.parse().map_err(|e| format!("{e}"))?;
                config = Some(MachineConfig::for_model(model));
            }
            "--config" => {
                let path = args.next().ok_or("--config needs a value")?;
                let json = std::fs::read_to_string(&path)
                    .map_err(|e| format!("cannot read {path}: {e}"))?;
                config =
                    Some(serde_json::from_str(&json).map_err(|e| format!("bad config: {e}"))?);
            }
            "--help" | "-h" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument {other:?}\n\n{USAGE}")),
        }
    }
    Ok(config.unwrap_or_default())
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match parse_config() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };
    log::info!(
        "{}: rotors {:?}, positions {:?}, reflector {}",
        config.model.display_name(),
        config.rotors,
        config.positions,
        config.reflector
    );

    let mut machine = match Machine::new(config) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("cannot read stdin: {e}");
        return ExitCode::FAILURE;
    }

    print!("{}", machine.feed(&input));
    log::info!("final positions {:?}", machine.positions());
    ExitCode::SUCCESS
}
