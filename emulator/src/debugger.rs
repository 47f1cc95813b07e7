use std::{
    io::{self, Write},
    ops::ControlFlow,
};

use libdeassembler::{DeassembledInstruction, Deassembler};
use libemulator::{Emulator, HaltReason, RunOutcome, StepRecord};
use libisa::Register;

use crate::{command::Command, render};

const DEFAULT_INSTRUCTION_LIMIT: usize = 1000000;
const DEFAULT_DEASSEMBLY_LEN: usize = 8;

/// Command prompt loop. Returns on `q` or end of input.
pub fn run(emulator: &mut Emulator) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    loop {
        println!("{}", status_line(emulator));

        let Some(command) = Command::prompt()? else {
            return Ok(());
        };

        match execute_command(&command, emulator, &mut stdout) {
            Ok(ControlFlow::Break(())) => return Ok(()),
            Ok(ControlFlow::Continue(())) => {}
            Err(e) => eprintln!("!> {}", e),
        }
    }
}

fn status_line(emulator: &Emulator) -> String {
    format!(
        "<<<   PC: {:02X}, A: {:X}, D: {:X}, PH/L: {:02X}, FLG: {:04b}{}   >>>",
        emulator.pc(),
        emulator.register(Register::A),
        emulator.register(Register::D),
        emulator.reg_file.pointer(),
        emulator.register(Register::Flg),
        if emulator.is_halted() { ", halted" } else { "" }
    )
}

pub fn execute_command<W>(
    command: &Command,
    emulator: &mut Emulator,
    out: &mut W,
) -> anyhow::Result<ControlFlow<()>>
where
    W: Write,
{
    let mut args = command.args();

    let Some(name) = args.next_opt() else {
        return Ok(ControlFlow::Continue(()));
    };

    match name {
        "s" => {
            let count = args.next_number_or(1)?;

            for _ in 0..count {
                match emulator.step() {
                    Some(record) => writeln!(out, "{}", step_line(&record))?,
                    None => {
                        writeln!(out, "Machine is halted")?;
                        break;
                    }
                }
            }
        }
        "r" => {
            let instruction_limit = args.next_number_or(DEFAULT_INSTRUCTION_LIMIT)?;
            let outcome = emulator.execute_limited(instruction_limit);

            writeln!(out, "{}", describe(outcome))?;
        }
        "b" => {
            let break_pc = args.next_address()?;
            let instruction_limit = args.next_number_or(DEFAULT_INSTRUCTION_LIMIT)?;

            let mut executed_instructions = 0;
            while emulator.pc() != break_pc {
                if executed_instructions >= instruction_limit {
                    writeln!(
                        out,
                        "Didn't reach breakpoint by {} executed instructions",
                        executed_instructions
                    )?;
                    return Ok(ControlFlow::Continue(()));
                }

                if emulator.step().is_none() {
                    writeln!(
                        out,
                        "Halted before reaching breakpoint, {} instructions executed",
                        executed_instructions
                    )?;
                    return Ok(ControlFlow::Continue(()));
                }

                executed_instructions += 1;
            }

            writeln!(out, "Executed {} instructions", executed_instructions)?;
        }
        "d" | "p" => {
            let begin = args.next_number_or(0)?;
            let length = args.next_number_or(libisa::MEMORY_SIZE)?;

            let memory = if name == "d" {
                &emulator.memory.data
            } else {
                &emulator.memory.program
            };

            write!(out, "{}", render::memory(memory, begin, length))?;
        }
        "regs" => write!(out, "{}", render::registers(emulator))?,
        "dis" => {
            let begin = args.next_number_or(emulator.pc() as usize)?;
            let length = args.next_number_or(DEFAULT_DEASSEMBLY_LEN)?;

            let code = emulator.memory.program.as_slice().get(begin..).unwrap_or(&[]);
            let deassembler = Deassembler::with_origin(code.iter().take(length), begin);

            write!(out, "{}", deassembler.deassemble_text())?;
        }
        "jmp" => {
            let addr = args.next_address()?;
            emulator.jump(addr);
            emulator.resume();
        }
        "reset" => emulator.reset(),
        "q" => return Ok(ControlFlow::Break(())),
        _ => {
            writeln!(out, "Unrecognized command!")?;
            return Ok(ControlFlow::Continue(()));
        }
    }

    let unused_arg_count = args.remaining();
    if unused_arg_count != 0 {
        writeln!(out, "{} unused command arguments!", unused_arg_count)?;
    }

    Ok(ControlFlow::Continue(()))
}

fn step_line(record: &StepRecord) -> String {
    DeassembledInstruction {
        address: record.address as usize,
        byte: record.byte,
        instruction: record.instruction,
    }
    .to_string()
}

fn describe(outcome: RunOutcome) -> String {
    match outcome {
        RunOutcome::Halted { steps, reason } => format!(
            "Halted after {} instructions ({})",
            steps,
            match reason {
                HaltReason::Instruction => "hlt",
                HaltReason::EndOfProgram => "end of program",
            }
        ),
        RunOutcome::LimitReached { steps } => {
            format!("Didn't halt by {} executed instructions", steps)
        }
        RunOutcome::Stopped { steps } => format!("Stopped after {} instructions", steps),
    }
}
