use libisa::{instruction::Instruction, Address, Register};

use crate::{
    observer::{none::NoObserver, Observer},
    Emulator, State,
};

use parsed::Flow;

mod parsed;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// A HLT instruction was executed.
    Instruction,
    /// The instruction at the last program address finished without jumping.
    EndOfProgram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted(HaltReason),
}

/// What a single step fetched and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub address: Address,
    pub byte: u8,
    pub instruction: Instruction,
    pub outcome: ExecuteOk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Halted { steps: usize, reason: HaltReason },
    LimitReached { steps: usize },
    /// The observer asked to stop. The machine is still running.
    Stopped { steps: usize },
}

impl Emulator {
    /// Fetches, decodes and executes one instruction. Returns `None` once halted.
    pub fn step(&mut self) -> Option<StepRecord> {
        if self.is_halted() {
            return None;
        }

        let (address, byte) = self.pc_next();
        let instruction = Instruction::decode(byte);

        log::trace!("{:02X}: {:02X}  {}", address, byte, instruction);

        let outcome = match self.execute_parsed_instruction(instruction) {
            Flow::Halt => ExecuteOk::Halted(HaltReason::Instruction),
            Flow::Jump(target) => {
                self.reg_file.set(Register::PC, target);
                ExecuteOk::Normal
            }
            // The fetch from the last address pushed PC past the end of program memory.
            Flow::Next if address == Address::MAX => ExecuteOk::Halted(HaltReason::EndOfProgram),
            Flow::Next => ExecuteOk::Normal,
        };

        if let ExecuteOk::Halted(reason) = outcome {
            log::debug!("Halted at {:02X} ({:?})", address, reason);
            self.halt(reason);
        }

        Some(StepRecord {
            address,
            byte,
            instruction,
            outcome,
        })
    }

    pub fn execute_instruction(&mut self) -> ExecuteOk {
        match (self.step(), self.state) {
            (Some(record), _) => record.outcome,
            (None, State::Halted(reason)) => ExecuteOk::Halted(reason),
            (None, State::Running) => ExecuteOk::Normal,
        }
    }

    /// Runs until the machine halts and returns the number of executed instructions.
    /// Never returns for a program that loops forever; see [`Emulator::execute_limited`].
    pub fn execute_to_halt(&mut self) -> usize {
        let mut steps = 0;

        while self.step().is_some() {
            steps += 1;
        }

        steps
    }

    pub fn execute_limited(&mut self, max_steps: usize) -> RunOutcome {
        self.run_observed(&mut NoObserver, Some(max_steps))
    }

    /// Runs until halted, until `max_steps` instructions were executed, or until the observer
    /// breaks. The observer sees the machine after every step.
    pub fn run_observed<O>(&mut self, observer: &mut O, max_steps: Option<usize>) -> RunOutcome
    where
        O: Observer + ?Sized,
    {
        let mut steps = 0;

        loop {
            if let State::Halted(reason) = self.state {
                return RunOutcome::Halted { steps, reason };
            }

            if max_steps.is_some_and(|max_steps| steps >= max_steps) {
                return RunOutcome::LimitReached { steps };
            }

            let Some(record) = self.step() else {
                continue;
            };
            steps += 1;

            if observer.after_step(self, &record).is_break() {
                return match record.outcome {
                    ExecuteOk::Halted(reason) => RunOutcome::Halted { steps, reason },
                    ExecuteOk::Normal => RunOutcome::Stopped { steps },
                };
            }
        }
    }

    /// Reads the byte at PC and advances PC, wrapping at the end of program memory.
    fn pc_next(&mut self) -> (Address, u8) {
        let address = self.reg_file.register(Register::PC);
        let byte = self.memory.program.byte(address);

        self.reg_file.set(Register::PC, address.wrapping_add(1));

        (address, byte)
    }
}
