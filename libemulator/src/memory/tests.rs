use libisa::MEMORY_SIZE;

use super::{AddressSpace, Memory};

#[test]
fn with_data_zero_fills() {
    let memory = Memory::with_data(&[0xAB, 0xCD]);

    assert_eq!(memory.byte(0), 0xAB);
    assert_eq!(memory.byte(1), 0xCD);
    assert!(memory.iter().skip(2).all(|byte| *byte == 0));
}

#[test]
fn write_from_truncates_at_the_end() {
    let mut memory = Memory::new();

    assert_eq!(memory.write_from(MEMORY_SIZE - 2, &[1, 2, 3, 4]), 2);
    assert_eq!(memory.byte(254), 1);
    assert_eq!(memory.byte(255), 2);
    assert_eq!(memory.byte(0), 0, "write must not wrap around");

    assert_eq!(memory.write_from(MEMORY_SIZE, &[1]), 0);
    assert_eq!(memory.write_from(MEMORY_SIZE + 10, &[1]), 0);
}

#[test]
fn oversized_data_is_cut() {
    let data: Vec<u8> = (0..=255u8).chain(0..10).collect();
    let memory = Memory::with_data(&data);

    assert_eq!(memory.as_slice().len(), MEMORY_SIZE);
    assert_eq!(memory.byte(255), 255);
    assert_eq!(memory.byte(0), 0);
}

#[test]
fn program_and_data_dont_alias() {
    let mut space = AddressSpace::new(Memory::with_data(&[0x11; MEMORY_SIZE]));
    *space.data.byte_mut(0x42) = 0x99;

    assert_eq!(space.program.byte(0x42), 0x11);
    assert_eq!(space.data.byte(0x42), 0x99);
    assert_eq!(space.data.byte(0x43), 0);
}
