use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

lazy_static! {
    static ref OPCODE_BIMAP: BiMap<Opcode, u8> = BiMap::from_iter([
        (Opcode::Nop, 0),
        (Opcode::Mov, 1),
        (Opcode::Ina, 2),
        (Opcode::Sto, 3),
        (Opcode::Lod, 4),
        (Opcode::Alu, 5),
        (Opcode::Jit, 6),
        (Opcode::Jif, 7),
        (Opcode::Push, 8),
        (Opcode::Pop, 9),
        (Opcode::Tak, 10),
        (Opcode::Prn, 11),
        (Opcode::Cls, 12),
        (Opcode::Hlt, 13),
        (Opcode::Trp, 14),
        (Opcode::Res, 15),
    ]);
    static ref ALU_OP_BIMAP: BiMap<AluOp, u8> = BiMap::from_iter([
        (AluOp::Add, 0),
        (AluOp::Sub, 1),
        (AluOp::Inc, 2),
        (AluOp::Dec, 3),
        (AluOp::Cmp, 4),
        (AluOp::Not, 5),
        (AluOp::And, 6),
        (AluOp::Nand, 7),
        (AluOp::Or, 8),
        (AluOp::Nor, 9),
        (AluOp::Xor, 10),
        (AluOp::Xnor, 11),
        (AluOp::Shl, 12),
        (AluOp::Shr, 13),
        (AluOp::Rol, 14),
        (AluOp::Ror, 15),
    ]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop,
    Mov,
    Ina,
    Sto,
    Lod,
    Alu,

    Jit,
    Jif,

    Push,
    Pop,
    Tak,
    Prn,
    Cls,

    Hlt,

    Trp,
    Res,
}

impl Opcode {
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        OPCODE_BIMAP.get_by_right(&opcode).copied()
    }

    pub fn opcode(&self) -> u8 {
        *OPCODE_BIMAP
            .get_by_left(self)
            .expect("No opcode mapping for opcode kind")
    }

    /// Opcodes that decode but have no behaviour yet.
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::Push | Self::Pop | Self::Tak | Self::Prn | Self::Cls | Self::Trp | Self::Res
        )
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Nop => "nop",
            Self::Mov => "mov",
            Self::Ina => "ina",
            Self::Sto => "sto",
            Self::Lod => "lod",
            Self::Alu => "alu",
            Self::Jit => "jit",
            Self::Jif => "jif",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Tak => "tak",
            Self::Prn => "prn",
            Self::Cls => "cls",
            Self::Hlt => "hlt",
            Self::Trp => "trp",
            Self::Res => "res",
        })
    }
}

/// ALU operations, always working on A with D as the second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Sub,
    Inc,
    Dec,
    Cmp,

    Not,
    And,
    Nand,
    Or,
    Nor,
    Xor,
    Xnor,

    Shl,
    Shr,
    Rol,
    Ror,
}

impl AluOp {
    pub fn from_sub_opcode(sub_opcode: u8) -> Option<Self> {
        ALU_OP_BIMAP.get_by_right(&sub_opcode).copied()
    }

    pub fn sub_opcode(&self) -> u8 {
        *ALU_OP_BIMAP
            .get_by_left(self)
            .expect("No sub-opcode mapping for ALU operation")
    }

    /// Whether the reference ALU masks the result down to a nibble.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Inc | Self::Dec)
    }
}

impl Display for AluOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Inc => "inc",
            Self::Dec => "dec",
            Self::Cmp => "cmp",
            Self::Not => "not",
            Self::And => "and",
            Self::Nand => "nand",
            Self::Or => "or",
            Self::Nor => "nor",
            Self::Xor => "xor",
            Self::Xnor => "xnor",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::Rol => "rol",
            Self::Ror => "ror",
        })
    }
}
