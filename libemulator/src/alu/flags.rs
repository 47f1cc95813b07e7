use bitflags::bitflags;
use libisa::FlagBit;

bitflags! {
    /// Contents of FLG. The upper nibble is never set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        const BORROW  = 0b1000;
        const CARRY   = 0b0100;
        const GREATER = 0b0010;
        const EQUAL   = 0b0001;
    }
}

impl From<FlagBit> for Flags {
    fn from(flag: FlagBit) -> Self {
        Self::from_bits_truncate(flag.mask())
    }
}
