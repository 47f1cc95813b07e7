pub mod instruction;
pub mod register;

pub use register::{AutoIndex, FlagBit, Register};

pub type Byte = u8;
pub type Nibble = u8;
pub type Address = u8;

/// Size of both the program and the data address space.
pub const MEMORY_SIZE: usize = 1 << 8;

pub const REGISTER_COUNT: usize = 7;

pub const NIBBLE_MASK: u8 = 0x0F;

pub fn nibble(value: u8) -> Nibble {
    value & NIBBLE_MASK
}
