use std::{path::PathBuf, process::exit};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use libemulator::{
    alu::AluMasking,
    loader::{self, LoadMode},
    Emulator, EmulatorConfig, RunOutcome,
};
use stepper::Stepper;

mod command;
mod debugger;
mod render;
mod stepper;

#[derive(Parser, Debug)]
#[command(version, about = "Emulator for the MM4001 4-bit processor")]
pub struct Args {
    /// Program images, loaded in the given order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Place images one after another instead of writing each one from address 0.
    #[arg(long)]
    append: bool,

    /// Mask bitwise, shift and rotate results to 4 bits like arithmetic results.
    #[arg(long)]
    mask_all: bool,

    /// Dump the machine after every instruction and wait for Enter.
    #[arg(short, long, conflicts_with = "interactive")]
    step: bool,

    /// Start the command prompt debugger.
    #[arg(short, long)]
    interactive: bool,

    /// Stop after this many instructions.
    #[arg(long)]
    step_limit: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mode = if args.append {
        LoadMode::Append
    } else {
        LoadMode::Overwrite
    };

    let program = match loader::load_images(&args.images, mode) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    let config = EmulatorConfig {
        alu_masking: if args.mask_all {
            AluMasking::All
        } else {
            AluMasking::ArithmeticOnly
        },
    };

    let mut emulator = Emulator::with_config(program, config);

    if let Err(e) = emulate(&mut emulator, &args) {
        eprintln!("{:#}", e);
        exit(1);
    }
}

fn emulate(emulator: &mut Emulator, args: &Args) -> anyhow::Result<()> {
    if args.interactive {
        return debugger::run(emulator).context("Debugger failed");
    }

    let outcome = if args.step {
        emulator.run_observed(&mut Stepper::new(), args.step_limit)
    } else {
        match args.step_limit {
            Some(limit) => emulator.execute_limited(limit),
            None => {
                let steps = emulator.execute_to_halt();
                log::info!("Executed {} instructions", steps);
                return Ok(());
            }
        }
    };

    match outcome {
        RunOutcome::Halted { steps, reason } => {
            log::info!("Halted after {} instructions ({:?})", steps, reason)
        }
        RunOutcome::LimitReached { steps } => {
            log::warn!("Didn't halt within {} instructions", steps)
        }
        RunOutcome::Stopped { steps } => log::info!("Stopped after {} instructions", steps),
    }

    Ok(())
}
