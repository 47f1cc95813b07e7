use libisa::instruction::{kind::AluOp, Instruction};

use crate::Deassembler;

#[test]
fn deassembles_every_byte() {
    let code = [0x2F, 0x5A, 0xD0];
    let deassembly = Deassembler::new(code.iter()).deassemble();

    let instructions: Vec<_> = deassembly.iter().map(|line| line.instruction).collect();
    assert_eq!(
        instructions,
        [Instruction::Ina(0xF), Instruction::Alu(AluOp::Xor), Instruction::Hlt]
    );

    let addresses: Vec<_> = deassembly.iter().map(|line| line.address).collect();
    assert_eq!(addresses, [0, 1, 2]);
}

#[test]
fn text_listing() {
    let code = [0x2F, 0x5A, 0xD0];

    assert_eq!(
        Deassembler::with_origin(code.iter(), 0x10).deassemble_text(),
        "10: 2F  ina $f\n11: 5A  xor\n12: D0  hlt\n"
    );
}

#[test]
fn single_instruction_text() {
    let code = [0x00];
    let mut deassembler = Deassembler::new(code.iter());

    assert_eq!(deassembler.deassemble_instruction_text(), "00: 00  nop");
    assert_eq!(
        deassembler.deassemble_instruction_text(),
        "<out of deassembler bounds>"
    );
}
