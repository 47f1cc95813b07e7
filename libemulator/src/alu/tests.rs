use libisa::instruction::kind::AluOp;

use super::{flags::Flags, AluMasking, ALU};

fn alu(op: AluOp, a: u8, d: u8) -> (u8, Flags) {
    let mut flags = Flags::empty();
    let result = ALU::new().execute(op, a, d, &mut flags);
    (result, flags)
}

#[test]
fn add_without_carry() {
    assert_eq!(alu(AluOp::Add, 1, 2), (3, Flags::empty()));
}

#[test]
fn add_with_carry() {
    assert_eq!(alu(AluOp::Add, 9, 9), (2, Flags::CARRY));
    assert_eq!(alu(AluOp::Add, 15, 1), (0, Flags::CARRY));
}

#[test]
fn sub_with_borrow() {
    assert_eq!(alu(AluOp::Sub, 3, 5), (14, Flags::BORROW));
    assert_eq!(alu(AluOp::Sub, 5, 3), (2, Flags::empty()));
    assert_eq!(alu(AluOp::Sub, 4, 4), (0, Flags::empty()));
}

#[test]
fn inc_and_dec_wrap() {
    assert_eq!(alu(AluOp::Inc, 15, 0), (0, Flags::CARRY));
    assert_eq!(alu(AluOp::Inc, 7, 0), (8, Flags::empty()));
    assert_eq!(alu(AluOp::Dec, 0, 0), (15, Flags::BORROW));
    assert_eq!(alu(AluOp::Dec, 7, 0), (6, Flags::empty()));
}

#[test]
fn cmp_leaves_a_alone() {
    assert_eq!(alu(AluOp::Cmp, 5, 5), (5, Flags::EQUAL));
    assert_eq!(alu(AluOp::Cmp, 7, 3), (7, Flags::GREATER));
    assert_eq!(alu(AluOp::Cmp, 3, 7), (3, Flags::empty()));
}

#[test]
fn flags_are_never_cleared() {
    let alu = ALU::new();
    let mut flags = Flags::empty();

    alu.execute(AluOp::Add, 9, 9, &mut flags);
    alu.execute(AluOp::Sub, 0, 1, &mut flags);
    alu.execute(AluOp::Add, 1, 1, &mut flags);
    alu.execute(AluOp::Cmp, 1, 2, &mut flags);

    assert_eq!(flags, Flags::CARRY | Flags::BORROW);
}

#[test]
fn bitwise_results_are_not_masked() {
    assert_eq!(alu(AluOp::Not, 0b0101, 0).0, 0b1111_1010);
    assert_eq!(alu(AluOp::And, 0b1100, 0b1010).0, 0b1000);
    assert_eq!(alu(AluOp::Nand, 0b1100, 0b1010).0, 0b1111_0111);
    assert_eq!(alu(AluOp::Or, 0b1100, 0b1010).0, 0b1110);
    assert_eq!(alu(AluOp::Nor, 0b1100, 0b1010).0, 0b1111_0001);
    assert_eq!(alu(AluOp::Xor, 0b1100, 0b1010).0, 0b0110);
    assert_eq!(alu(AluOp::Xnor, 0b1100, 0b1010).0, 0b1111_1001);
}

#[test]
fn shifts_are_not_masked() {
    assert_eq!(alu(AluOp::Shl, 0b1001, 1).0, 0b1_0010);
    assert_eq!(alu(AluOp::Shl, 0b1001, 8).0, 0);
    assert_eq!(alu(AluOp::Shr, 0b1001, 3).0, 0b1);
    assert_eq!(alu(AluOp::Shr, 0b1001, 200).0, 0);
}

#[test]
fn rotates_in_range() {
    // The bits rotated out of the nibble stay in the upper half of the cell.
    assert_eq!(alu(AluOp::Rol, 0b1001, 1).0, 0b1_0011);
    assert_eq!(alu(AluOp::Ror, 0b1001, 1).0, 0b0100_1100);
}

#[test]
fn rotates_out_of_range_dont_panic() {
    for d in [0, 4, 5, 15, 255] {
        for op in [AluOp::Rol, AluOp::Ror] {
            let _ = alu(op, 0b1011, d);
        }
    }
}

#[test]
fn nibble_masking_applies_everywhere() {
    let alu = ALU::with_masking(AluMasking::All);
    let mut flags = Flags::empty();

    assert_eq!(alu.execute(AluOp::Not, 0b0101, 0, &mut flags), 0b1010);
    assert_eq!(alu.execute(AluOp::Shl, 0b1001, 1, &mut flags), 0b0010);
    assert_eq!(alu.execute(AluOp::Add, 9, 9, &mut flags), 2);
    assert_eq!(flags, Flags::CARRY);
}

#[test]
fn only_arithmetic_results_are_masked_by_default() {
    for op in (0..16).filter_map(AluOp::from_sub_opcode) {
        let (result, _) = alu(op, 0x0F, 0x0F);

        if op.is_arithmetic() {
            assert!(result <= 0x0F, "{} gave {:#x}", op, result);
        }
    }

    assert_eq!(alu(AluOp::Not, 0b0101, 0).0, 0b1111_1010);
    assert_eq!(alu(AluOp::Shl, 0b1111, 1).0, 0b1_1110);
    assert!(AluOp::Dec.is_arithmetic());
    assert!(!AluOp::Shl.is_arithmetic());
}
