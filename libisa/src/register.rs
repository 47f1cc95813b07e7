use std::fmt::Display;

/// The seven machine registers. Only the first four can be named by a 2-bit operand field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    D,
    PL,
    PH,
    Flg,
    PC,
    SP,
}

impl Register {
    /// Maps a 2-bit operand field onto A, D, PL or PH. Higher bits are ignored.
    pub const fn from_field(field: u8) -> Self {
        match field & 0b11 {
            0 => Self::A,
            1 => Self::D,
            2 => Self::PL,
            _ => Self::PH,
        }
    }

    pub const fn field(self) -> Option<u8> {
        match self {
            Self::A => Some(0),
            Self::D => Some(1),
            Self::PL => Some(2),
            Self::PH => Some(3),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::A => "a",
            Self::D => "d",
            Self::PL => "pl",
            Self::PH => "ph",
            Self::Flg => "flg",
            Self::PC => "pc",
            Self::SP => "sp",
        })
    }
}

/// Condition flags, named by their bit position inside FLG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagBit {
    Equal,
    Greater,
    Carry,
    Borrow,
}

impl FlagBit {
    /// Resolves a jump condition index. Indices are bit positions in FLG (0 = equal, 3 = borrow);
    /// anything past 3 names no flag.
    pub const fn from_position(position: u8) -> Option<Self> {
        match position {
            0 => Some(Self::Equal),
            1 => Some(Self::Greater),
            2 => Some(Self::Carry),
            3 => Some(Self::Borrow),
            _ => None,
        }
    }

    pub const fn position(self) -> u8 {
        match self {
            Self::Equal => 0,
            Self::Greater => 1,
            Self::Carry => 2,
            Self::Borrow => 3,
        }
    }

    pub const fn mask(self) -> u8 {
        1 << self.position()
    }
}

impl Display for FlagBit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Equal => "e",
            Self::Greater => "g",
            Self::Carry => "c",
            Self::Borrow => "b",
        })
    }
}

/// Pointer adjustment applied after a STO or LOD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoIndex {
    None,
    Increment,
    Decrement,
    /// Mode 3 has no assigned meaning and leaves the pointer alone.
    Unassigned,
}

impl AutoIndex {
    pub const fn from_field(field: u8) -> Self {
        match field & 0b11 {
            0 => Self::None,
            1 => Self::Increment,
            2 => Self::Decrement,
            _ => Self::Unassigned,
        }
    }

    pub const fn field(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Increment => 1,
            Self::Decrement => 2,
            Self::Unassigned => 3,
        }
    }
}
