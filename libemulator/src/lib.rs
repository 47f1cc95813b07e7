use alu::{AluMasking, ALU};
use libisa::{FlagBit, Register};
use memory::{AddressSpace, Memory};
use regfile::RegFile;

pub mod alu;
pub mod execute;
pub mod loader;
pub mod memory;
pub mod observer;
pub mod regfile;

pub use execute::{ExecuteOk, HaltReason, RunOutcome, StepRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmulatorConfig {
    pub alu_masking: AluMasking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted(HaltReason),
}

#[derive(Debug, Clone)]
pub struct Emulator {
    pub memory: AddressSpace,
    pub reg_file: RegFile,
    pub alu: ALU,
    state: State,
}

impl Emulator {
    /// Creates a zeroed machine with `program` loaded from address 0. Bytes past the end of
    /// program memory are dropped.
    pub fn new(program: &[u8]) -> Self {
        Self::with_config(Memory::with_data(program), EmulatorConfig::default())
    }

    pub fn with_config(program: Memory, config: EmulatorConfig) -> Self {
        Self {
            memory: AddressSpace::new(program),
            reg_file: RegFile::new(),
            alu: ALU::with_masking(config.alu_masking),
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.state, State::Halted(_))
    }

    /// Clears registers and data memory and resumes from address 0. Program memory is kept.
    pub fn reset(&mut self) {
        self.reg_file = RegFile::new();
        self.memory.data.clear();
        self.state = State::Running;
    }

    pub fn register(&self, register: Register) -> u8 {
        self.reg_file.register(register)
    }

    pub fn set_register(&mut self, register: Register, value: u8) {
        self.reg_file.set(register, value);
    }

    pub fn pc(&self) -> u8 {
        self.register(Register::PC)
    }

    /// Moves the program counter. Resumes a machine that ran off the end of program memory.
    pub fn jump(&mut self, addr: u8) {
        self.set_register(Register::PC, addr);

        if self.state == State::Halted(HaltReason::EndOfProgram) {
            self.state = State::Running;
        }
    }

    /// Clears a halt of either kind without touching registers or memory.
    pub fn resume(&mut self) {
        self.state = State::Running;
    }

    pub fn flag(&self, flag: FlagBit) -> bool {
        self.reg_file.flag(flag)
    }

    pub fn set_flag(&mut self, flag: FlagBit, value: bool) {
        self.reg_file.set_flag(flag, value);
    }

    pub(crate) fn halt(&mut self, reason: HaltReason) {
        self.state = State::Halted(reason);
    }
}
