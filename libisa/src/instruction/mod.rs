use std::fmt::Display;

use kind::{AluOp, Opcode};
use thiserror::Error;

use crate::{AutoIndex, Byte, FlagBit, Nibble, Register};

pub mod assembler;
pub mod kind;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Program of {0} bytes doesn't fit into program memory")]
    ProgramTooLarge(usize),
}

/// The three bit fields of an instruction byte: `opcode = [7:4]`, `e1 = [3:2]`, `e2 = [1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fields {
    pub opcode: u8,
    pub e1: u8,
    pub e2: u8,
}

impl Fields {
    pub const fn split(byte: Byte) -> Self {
        Self {
            opcode: byte >> 4,
            e1: (byte & 0x0C) >> 2,
            e2: byte & 0x03,
        }
    }

    pub const fn join(self) -> Byte {
        (self.opcode & 0xF) << 4 | (self.e1 & 0b11) << 2 | (self.e2 & 0b11)
    }

    /// Both operand fields read as one 4-bit index, `(e1 << 2) + e2`.
    pub const fn combined(self) -> u8 {
        (self.e1 << 2) + self.e2
    }

    const fn from_combined(opcode: u8, combined: u8) -> Self {
        Self {
            opcode,
            e1: (combined >> 2) & 0b11,
            e2: combined & 0b11,
        }
    }
}

/// Jump condition selected by the combined operand fields of JIT/JIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Flag(FlagBit),
    /// Index 4..=15, which names no flag. Jumps on such a condition never happen.
    Unassigned(u8),
}

impl Condition {
    pub const fn from_index(index: u8) -> Self {
        match FlagBit::from_position(index) {
            Some(flag) => Self::Flag(flag),
            None => Self::Unassigned(index & 0xF),
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Flag(flag) => flag.position(),
            Self::Unassigned(index) => index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,
    Mov { dest: Register, src: Register },
    Ina(Nibble),
    Sto { src: Register, index: AutoIndex },
    Lod { dest: Register, index: AutoIndex },
    Alu(AluOp),
    Jit(Condition),
    Jif(Condition),
    Push,
    Pop,
    Tak,
    Prn,
    Cls,
    Hlt,
    Trp,
    Res,
}

impl Instruction {
    /// Decodes any byte. Every byte is a valid instruction; opcodes without behaviour decode to
    /// their reserved variant and execute as no-ops.
    pub fn decode(byte: Byte) -> Self {
        let fields = Fields::split(byte);

        let Some(opcode) = Opcode::from_opcode(fields.opcode) else {
            return Self::Nop;
        };

        match opcode {
            Opcode::Nop => Self::Nop,
            Opcode::Mov => Self::Mov {
                dest: Register::from_field(fields.e1),
                src: Register::from_field(fields.e2),
            },
            Opcode::Ina => Self::Ina(crate::nibble(byte)),
            Opcode::Sto => Self::Sto {
                src: Register::from_field(fields.e2),
                index: AutoIndex::from_field(fields.e1),
            },
            Opcode::Lod => Self::Lod {
                dest: Register::from_field(fields.e1),
                index: AutoIndex::from_field(fields.e2),
            },
            Opcode::Alu => match AluOp::from_sub_opcode(fields.combined()) {
                Some(op) => Self::Alu(op),
                None => Self::Nop,
            },
            Opcode::Jit => Self::Jit(Condition::from_index(fields.combined())),
            Opcode::Jif => Self::Jif(Condition::from_index(fields.combined())),
            Opcode::Push => Self::Push,
            Opcode::Pop => Self::Pop,
            Opcode::Tak => Self::Tak,
            Opcode::Prn => Self::Prn,
            Opcode::Cls => Self::Cls,
            Opcode::Hlt => Self::Hlt,
            Opcode::Trp => Self::Trp,
            Opcode::Res => Self::Res,
        }
    }

    /// Encodes the instruction. Operand fields that an instruction doesn't use are zero.
    /// Registers outside A, D, PL and PH can't be encoded and fall back to A.
    pub fn encode(self) -> Byte {
        let opcode = self.opcode().opcode();

        let fields = match self {
            Self::Mov { dest, src } => Fields {
                opcode,
                e1: dest.field().unwrap_or(0),
                e2: src.field().unwrap_or(0),
            },
            Self::Ina(value) => Fields::from_combined(opcode, crate::nibble(value)),
            Self::Sto { src, index } => Fields {
                opcode,
                e1: index.field(),
                e2: src.field().unwrap_or(0),
            },
            Self::Lod { dest, index } => Fields {
                opcode,
                e1: dest.field().unwrap_or(0),
                e2: index.field(),
            },
            Self::Alu(op) => Fields::from_combined(opcode, op.sub_opcode()),
            Self::Jit(condition) | Self::Jif(condition) => {
                Fields::from_combined(opcode, condition.index())
            }
            _ => Fields::from_combined(opcode, 0),
        };

        fields.join()
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Nop => Opcode::Nop,
            Self::Mov { .. } => Opcode::Mov,
            Self::Ina(_) => Opcode::Ina,
            Self::Sto { .. } => Opcode::Sto,
            Self::Lod { .. } => Opcode::Lod,
            Self::Alu(_) => Opcode::Alu,
            Self::Jit(_) => Opcode::Jit,
            Self::Jif(_) => Opcode::Jif,
            Self::Push => Opcode::Push,
            Self::Pop => Opcode::Pop,
            Self::Tak => Opcode::Tak,
            Self::Prn => Opcode::Prn,
            Self::Cls => Opcode::Cls,
            Self::Hlt => Opcode::Hlt,
            Self::Trp => Opcode::Trp,
            Self::Res => Opcode::Res,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mov { dest, src } => write!(f, "mov %{}, %{}", dest, src),
            Self::Ina(value) => write!(f, "ina ${:x}", value),
            Self::Sto { src, index } => {
                write!(f, "sto %{}", src)?;
                fmt_auto_index(f, *index)
            }
            Self::Lod { dest, index } => {
                write!(f, "lod %{}", dest)?;
                fmt_auto_index(f, *index)
            }
            Self::Alu(op) => write!(f, "{}", op),
            Self::Jit(condition) | Self::Jif(condition) => {
                write!(f, "{} ", self.opcode())?;

                match condition {
                    Condition::Flag(flag) => write!(f, "{}", flag),
                    Condition::Unassigned(index) => write!(f, "?{}", index),
                }
            }
            _ => write!(f, "{}", self.opcode()),
        }
    }
}

fn fmt_auto_index(f: &mut std::fmt::Formatter<'_>, index: AutoIndex) -> std::fmt::Result {
    match index {
        AutoIndex::None => Ok(()),
        AutoIndex::Increment => f.write_str(", [+]"),
        AutoIndex::Decrement => f.write_str(", [-]"),
        AutoIndex::Unassigned => f.write_str(", [?]"),
    }
}
