use libemulator::{memory::Memory, Emulator, StepRecord};
use libisa::{instruction::Fields, FlagBit, Register};

const ROW_LEN: usize = 16;

/// Hex dump of `len` bytes from `begin`, sixteen per row with the row address in front.
pub fn memory(memory: &Memory, begin: usize, len: usize) -> String {
    let bytes: Vec<_> = memory.iter().copied().enumerate().skip(begin).take(len).collect();

    bytes
        .chunks(ROW_LEN)
        .map(|row| {
            let address = row.first().map_or(begin, |(address, _)| *address);
            let values: Vec<_> = row.iter().map(|(_, byte)| format!("{:x}", byte)).collect();

            format!("{:02X}: {}\n", address, values.join(" "))
        })
        .collect()
}

pub fn registers(emulator: &Emulator) -> String {
    let pointer = emulator.reg_file.pointer();
    let flag_bits: Vec<_> = [
        FlagBit::Borrow,
        FlagBit::Carry,
        FlagBit::Greater,
        FlagBit::Equal,
    ]
    .into_iter()
    .map(|flag| u8::from(emulator.flag(flag)).to_string())
    .collect();

    [
        format!("Reg A: {:X}", emulator.register(Register::A)),
        format!("Reg D: {:X}", emulator.register(Register::D)),
        format!(
            "Reg PH/L: {:02X} - Address value: {:X}",
            pointer,
            emulator.memory.data.byte(pointer)
        ),
        format!("Reg SP: {:X}", emulator.register(Register::SP)),
        format!("Reg PC: {:02X}", emulator.pc()),
        format!("Reg FLG: {:X}", emulator.register(Register::Flg)),
        "B C G E".to_string(),
        flag_bits.join(" "),
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}

pub fn step(record: &StepRecord) -> String {
    let fields = Fields::split(record.byte);

    format!(
        "Inst: {:02X} ({}) at {:02X}\nE1: {} E2: {}\n",
        record.byte, record.instruction, record.address, fields.e1, fields.e2
    )
}

/// Full machine dump: data memory, registers and flags, plus the last step if there is one.
pub fn dump(emulator: &Emulator, record: Option<&StepRecord>) -> String {
    let mut output = format!(
        "RAM Content (16x16):\n{}\n",
        memory(&emulator.memory.data, 0, libisa::MEMORY_SIZE)
    );

    output.push_str(&registers(emulator));

    if let Some(record) = record {
        output.push_str(&step(record));
    }

    output
}

#[cfg(test)]
mod tests {
    use libemulator::{memory::Memory, Emulator};

    use super::{dump, memory, registers};

    #[test]
    fn memory_rows() {
        let data: Vec<u8> = (0..20).collect();
        let memory_dump = memory(&Memory::with_data(&data), 14, 4);

        assert_eq!(memory_dump, "0E: e f 10 11\n");
    }

    #[test]
    fn registers_after_sample_program() {
        let mut emulator = Emulator::new(&[0x2F, 0x5A, 0xD0]);
        emulator.execute_to_halt();

        let text = registers(&emulator);

        assert!(text.contains("Reg A: F\n"), "{}", text);
        assert!(text.contains("Reg PC: 03\n"), "{}", text);
        assert!(text.contains("B C G E\n0 0 0 0\n"), "{}", text);
    }

    #[test]
    fn dump_has_sixteen_rows() {
        let mut emulator = Emulator::new(&[0x2F]);
        let record = emulator.step().expect("Machine halted before the first step");

        let text = dump(&emulator, Some(&record));

        assert_eq!(text.lines().filter(|line| line.contains(": 0 0 0")).count(), 16);
        assert!(text.contains("Inst: 2F (ina $f) at 00\nE1: 3 E2: 3\n"), "{}", text);
    }
}
