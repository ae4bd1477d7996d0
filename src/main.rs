// NES Emulator - Main Entry Point
//
// Parses CLI arguments, loads the requested ROM, and either opens a live
// display window or runs the machine headless (frame-stepped, optionally
// emitting a nestest-format trace log) for regression harnesses and CI.

use clap::Parser;
use nes_rs::display::{run_emulator, WindowConfig};
use nes_rs::Emulator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

/// A cycle-accurate NES (6502 + 2C02 + mapper) emulator.
#[derive(Parser, Debug)]
#[command(name = "nes-rs", version, about)]
struct Cli {
    /// Path to an iNES (.nes) ROM file.
    rom: String,

    /// Emit a nestest-format CPU trace to `trace.log`.
    #[arg(long)]
    trace: bool,

    /// Stop after this many CPU cycles (headless mode only, unless also
    /// hit by the display loop's own cap).
    #[arg(long, value_name = "N")]
    max_cycles: Option<u64>,

    /// Window scale factor (1-8), ignored in headless mode.
    #[arg(long, value_name = "N")]
    scale: Option<u32>,

    /// Run without opening a display window: step the machine to completion
    /// (or the cycle cap) and exit. Used by the regression harness and CI.
    #[arg(long)]
    headless: bool,
}

fn run(cli: Cli) -> Result<(), nes_rs::EmulatorError> {
    env_logger::init();

    let mut emulator = Emulator::new();
    emulator.load_rom(&cli.rom)?;

    if let Some(max) = cli.max_cycles {
        emulator.config_mut().trace.max_cycles = Some(max);
    }
    if cli.trace {
        emulator.config_mut().trace.enabled = true;
    }

    let mut trace_writer = if emulator.config().trace.enabled {
        let file = File::create("trace.log").map_err(nes_rs::EmulatorError::IoFailure)?;
        Some(BufWriter::new(file))
    } else {
        None
    };

    if cli.headless {
        loop {
            if let Some(writer) = trace_writer.as_mut() {
                let line = emulator.trace_line();
                writeln!(writer, "{}", line).map_err(nes_rs::EmulatorError::IoFailure)?;
            }
            let (_, _) = emulator.step();
            if let Some(max) = emulator.config().trace.max_cycles {
                if emulator.cpu().cycles >= max {
                    break;
                }
            }
        }
        if let Some(writer) = trace_writer.as_mut() {
            writer.flush().map_err(nes_rs::EmulatorError::IoFailure)?;
        }
        return Ok(());
    }

    let mut config = WindowConfig::new();
    if let Some(scale) = cli.scale {
        config = config.with_scale(scale);
    }

    run_emulator(config, emulator).map_err(|err| {
        nes_rs::EmulatorError::UnsupportedFeature(format!("display failure: {}", err))
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
