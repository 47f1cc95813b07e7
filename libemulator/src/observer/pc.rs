use std::ops::ControlFlow;

use libisa::Address;

use crate::{Emulator, StepRecord};

use super::Observer;

/// Records the address of every executed instruction, in order.
#[derive(Debug, Clone, Default)]
pub struct PcTrace {
    pub traces: Vec<Address>,
}

impl Observer for PcTrace {
    fn after_step(&mut self, _: &Emulator, record: &StepRecord) -> ControlFlow<()> {
        self.traces.push(record.address);
        ControlFlow::Continue(())
    }
}
