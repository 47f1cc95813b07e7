use std::ops::ControlFlow;

use crate::{Emulator, StepRecord};

use super::Observer;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl Observer for NoObserver {
    fn after_step(&mut self, _: &Emulator, _: &StepRecord) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
