use flags::Flags;
use libisa::instruction::kind::AluOp;

pub mod flags;

#[cfg(test)]
mod tests;

/// Which ALU results get cut down to a nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AluMasking {
    /// Only ADD, SUB, INC and DEC are masked. Bitwise, shift and rotate results keep
    /// whatever lands in the upper nibble of the 8-bit cell.
    #[default]
    ArithmeticOnly,
    /// Every result that writes A is masked.
    All,
}

/// Works on A and D only. Flags are only ever raised here, never cleared.
#[derive(Debug, Clone, Copy, Default)]
pub struct ALU {
    pub masking: AluMasking,
}

impl ALU {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_masking(masking: AluMasking) -> Self {
        Self { masking }
    }

    /// Applies `op` and returns the new value of A.
    pub fn execute(&self, op: AluOp, a: u8, d: u8, flags: &mut Flags) -> u8 {
        let value = match op {
            AluOp::Add => Self::add(a, d, flags),
            AluOp::Sub => Self::sub(a, d, flags),
            AluOp::Inc => Self::add(a, 1, flags),
            AluOp::Dec => Self::sub(a, 1, flags),
            AluOp::Cmp => {
                Self::cmp(a, d, flags);
                return a;
            }
            AluOp::Not => !a,
            AluOp::And => a & d,
            AluOp::Nand => !(a & d),
            AluOp::Or => a | d,
            AluOp::Nor => !(a | d),
            AluOp::Xor => a ^ d,
            AluOp::Xnor => !(a ^ d),
            AluOp::Shl => shift_left(a, d as u32),
            AluOp::Shr => shift_right(a, d as u32),
            // Rotates are only meaningful for 1..=3. Other amounts produce
            // whatever the shifts give, out-of-range shifts yield zero.
            AluOp::Rol => shift_left(a, d as u32) | shift_right(a, 4u32.wrapping_sub(d as u32)),
            AluOp::Ror => shift_right(a, d as u32) | shift_left(a, 4u32.wrapping_sub(d as u32)),
        };

        match self.masking {
            AluMasking::ArithmeticOnly if !op.is_arithmetic() => value,
            _ => libisa::nibble(value),
        }
    }

    pub fn add(a: u8, b: u8, flags: &mut Flags) -> u8 {
        let raw = a as u16 + b as u16;

        if raw > libisa::NIBBLE_MASK as u16 {
            flags.insert(Flags::CARRY);
        }

        libisa::nibble(raw as u8)
    }

    pub fn sub(a: u8, b: u8, flags: &mut Flags) -> u8 {
        if b > a {
            flags.insert(Flags::BORROW);
        }

        libisa::nibble(a.wrapping_sub(b))
    }

    pub fn cmp(a: u8, b: u8, flags: &mut Flags) {
        if a > b {
            flags.insert(Flags::GREATER);
        }

        if a == b {
            flags.insert(Flags::EQUAL);
        }
    }
}

fn shift_left(value: u8, amount: u32) -> u8 {
    (value as u32).checked_shl(amount).unwrap_or(0) as u8
}

fn shift_right(value: u8, amount: u32) -> u8 {
    (value as u32).checked_shr(amount).unwrap_or(0) as u8
}
