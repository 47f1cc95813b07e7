use libisa::{Address, AutoIndex, FlagBit, Register};

use crate::alu::flags::Flags;

/// All seven registers, each in an 8-bit cell. A, D, PL, PH and FLG nominally hold a nibble,
/// but only FLG is forced to one; everything else stores whatever it's given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegFile([u8; libisa::REGISTER_COUNT]);

impl RegFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, register: Register) -> u8 {
        self.0[register.index()]
    }

    pub fn set(&mut self, register: Register, value: u8) {
        let value = match register {
            Register::Flg => libisa::nibble(value),
            _ => value,
        };

        self.0[register.index()] = value;
    }

    /// The data address formed by PH and PL.
    pub fn pointer(&self) -> Address {
        (self.register(Register::PH) << 4).wrapping_add(self.register(Register::PL))
    }

    pub fn store_pointer(&mut self, addr: Address) {
        self.set(Register::PH, addr >> 4);
        self.set(Register::PL, addr & 0x0F);
    }

    /// Post-access pointer update. Wraps in both directions.
    pub fn auto_index(&mut self, mode: AutoIndex) {
        let pointer = self.pointer();

        match mode {
            AutoIndex::Increment => self.store_pointer(pointer.wrapping_add(1)),
            AutoIndex::Decrement => self.store_pointer(pointer.wrapping_sub(1)),
            AutoIndex::None | AutoIndex::Unassigned => {}
        }
    }

    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.register(Register::Flg))
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.set(Register::Flg, flags.bits());
    }

    pub fn flag(&self, flag: FlagBit) -> bool {
        self.flags().contains(flag.into())
    }

    pub fn set_flag(&mut self, flag: FlagBit, value: bool) {
        let mut flags = self.flags();
        flags.set(flag.into(), value);
        self.set_flags(flags);
    }
}
