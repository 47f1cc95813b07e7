use libisa::{
    instruction::{Condition, Instruction},
    Address, Register,
};

use crate::Emulator;

/// How control continues after an instruction.
pub(super) enum Flow {
    Next,
    Jump(Address),
    Halt,
}

impl Emulator {
    pub(super) fn execute_parsed_instruction(&mut self, instruction: Instruction) -> Flow {
        match instruction {
            Instruction::Nop => {}

            Instruction::Ina(value) => self.reg_file.set(Register::A, value),

            Instruction::Mov { dest, src } => {
                let value = self.reg_file.register(src);
                self.reg_file.set(dest, value);
            }

            Instruction::Sto { src, index } => {
                let dest_addr = self.reg_file.pointer();
                let value = self.reg_file.register(src);

                *self.memory.data.byte_mut(dest_addr) = value;
                self.reg_file.auto_index(index);
            }

            Instruction::Lod { dest, index } => {
                let src_addr = self.reg_file.pointer();
                let value = self.memory.data.byte(src_addr);

                self.reg_file.set(dest, value);
                self.reg_file.auto_index(index);
            }

            Instruction::Alu(op) => {
                let a = self.reg_file.register(Register::A);
                let d = self.reg_file.register(Register::D);
                let mut flags = self.reg_file.flags();

                let result = self.alu.execute(op, a, d, &mut flags);

                self.reg_file.set_flags(flags);
                self.reg_file.set(Register::A, result);
            }

            Instruction::Jit(condition) => {
                if self.condition(condition) == Some(true) {
                    return Flow::Jump(self.reg_file.pointer());
                }
            }

            Instruction::Jif(condition) => {
                if self.condition(condition) == Some(false) {
                    return Flow::Jump(self.reg_file.pointer());
                }
            }

            Instruction::Hlt => return Flow::Halt,

            Instruction::Push
            | Instruction::Pop
            | Instruction::Tak
            | Instruction::Prn
            | Instruction::Cls
            | Instruction::Trp
            | Instruction::Res => {
                log::trace!("Reserved opcode {} executed as nop", instruction.opcode());
            }
        }

        Flow::Next
    }

    /// `None` for a condition index that names no flag; neither JIT nor JIF jumps on it.
    fn condition(&self, condition: Condition) -> Option<bool> {
        match condition {
            Condition::Flag(flag) => Some(self.reg_file.flag(flag)),
            Condition::Unassigned(index) => {
                log::trace!("Jump on unassigned flag index {} ignored", index);
                None
            }
        }
    }
}
