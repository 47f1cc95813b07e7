use libisa::{Address, MEMORY_SIZE};

#[cfg(test)]
mod tests;

/// A 256-byte array addressed by a single byte, so every access is in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory([u8; MEMORY_SIZE]);

impl Memory {
    pub fn new() -> Self {
        Self([0; MEMORY_SIZE])
    }

    /// Copies `data` in from address 0. Anything past the end of memory is dropped.
    pub fn with_data(data: &[u8]) -> Self {
        let mut memory = Self::new();
        memory.write_from(0, data);
        memory
    }

    /// Writes `data` starting at `offset` and returns how many bytes fit.
    pub fn write_from(&mut self, offset: usize, data: &[u8]) -> usize {
        let Some(free) = self.0.get_mut(offset..) else {
            return 0;
        };

        let len = data.len().min(free.len());
        free[..len].copy_from_slice(&data[..len]);
        len
    }

    pub fn byte(&self, addr: Address) -> u8 {
        self.0[addr as usize]
    }

    pub fn byte_mut(&mut self, addr: Address) -> &mut u8 {
        &mut self.0[addr as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.fill(0);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// Program and data memory. The two never alias: the same address names different bytes in each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSpace {
    /// Only written by loading, read by instruction fetch.
    pub program: Memory,
    /// RAM, reached through the PH/PL pointer.
    pub data: Memory,
}

impl AddressSpace {
    pub fn new(program: Memory) -> Self {
        Self {
            program,
            data: Memory::new(),
        }
    }
}
