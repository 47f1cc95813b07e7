use std::{fmt::Display, iter::Enumerate};

use libisa::instruction::Instruction;

#[cfg(test)]
mod tests;

/// One decoded program byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeassembledInstruction {
    pub address: usize,
    pub byte: u8,
    pub instruction: Instruction,
}

impl Display for DeassembledInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}: {:02X}  {}", self.address, self.byte, self.instruction)
    }
}

/// Every byte is an instruction, so deassembly can't fail.
pub struct Deassembler<I> {
    code_iter: Enumerate<I>,
    origin: usize,
}

impl<'a, I> Deassembler<I>
where
    I: Iterator<Item = &'a u8>,
{
    pub fn new(code_iter: I) -> Self {
        Self::with_origin(code_iter, 0)
    }

    /// Deassembles code whose first byte lives at `origin`.
    pub fn with_origin(code_iter: I, origin: usize) -> Self {
        Self {
            code_iter: code_iter.enumerate(),
            origin,
        }
    }

    pub fn deassemble(self) -> Vec<DeassembledInstruction> {
        self.collect()
    }

    pub fn deassemble_text(self) -> String {
        self.map(|instr| format!("{}\n", instr)).collect()
    }

    pub fn deassemble_instruction_text(&mut self) -> String {
        match self.next() {
            Some(instr) => instr.to_string(),
            None => "<out of deassembler bounds>".to_string(),
        }
    }
}

impl<'a, I> Iterator for Deassembler<I>
where
    I: Iterator<Item = &'a u8>,
{
    type Item = DeassembledInstruction;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, byte) = self.code_iter.next()?;

        Some(DeassembledInstruction {
            address: self.origin + offset,
            byte: *byte,
            instruction: Instruction::decode(*byte),
        })
    }
}
