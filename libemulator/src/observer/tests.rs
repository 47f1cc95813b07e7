use std::ops::ControlFlow;

use libisa::{
    instruction::{assembler::assemble, kind::AluOp, Instruction},
    Register,
};

use crate::{Emulator, HaltReason, RunOutcome, StepRecord};

use super::pc::PcTrace;

#[test]
fn pc_trace_records_every_step() -> anyhow::Result<()> {
    let program = assemble([
        Instruction::Nop,
        Instruction::Ina(3),
        Instruction::Alu(AluOp::Inc),
        Instruction::Hlt,
        Instruction::Ina(9),
    ])?;

    let mut emulator = Emulator::new(&program);
    let mut trace = PcTrace::default();

    let outcome = emulator.run_observed(&mut trace, None);

    assert_eq!(
        outcome,
        RunOutcome::Halted {
            steps: 4,
            reason: HaltReason::Instruction
        }
    );
    assert_eq!(trace.traces, [0, 1, 2, 3]);
    assert_eq!(emulator.register(Register::A), 4);

    Ok(())
}

#[test]
fn closure_observer_can_stop_the_run() -> anyhow::Result<()> {
    let program = assemble([Instruction::Nop; 10])?;
    let mut emulator = Emulator::new(&program);

    let mut seen = 0;
    let mut observer = |_: &Emulator, _: &StepRecord| {
        seen += 1;

        if seen == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    };

    let outcome = emulator.run_observed(&mut observer, None);

    assert_eq!(outcome, RunOutcome::Stopped { steps: 3 });
    assert!(!emulator.is_halted());
    assert_eq!(emulator.pc(), 3);

    Ok(())
}

#[test]
fn observer_sees_state_after_the_step() -> anyhow::Result<()> {
    let program = assemble([Instruction::Ina(7), Instruction::Hlt])?;
    let mut emulator = Emulator::new(&program);

    let mut values = Vec::new();
    let mut observer = |emulator: &Emulator, record: &StepRecord| {
        values.push((record.address, emulator.register(Register::A)));
        ControlFlow::Continue(())
    };

    emulator.run_observed(&mut observer, None);

    assert_eq!(values, [(0, 7), (1, 7)]);

    Ok(())
}
