use std::ops::ControlFlow;

use crate::{Emulator, StepRecord};

pub mod none;
pub mod pc;

#[cfg(test)]
mod tests;

/// Hook called by [`Emulator::run_observed`] after every executed instruction.
///
/// Returning [`ControlFlow::Break`] ends the run; the machine itself isn't halted and can be
/// stepped again. Plain stepping through [`Emulator::step`] never calls an observer.
pub trait Observer {
    fn after_step(&mut self, emulator: &Emulator, record: &StepRecord) -> ControlFlow<()>;
}

impl<F> Observer for F
where
    F: FnMut(&Emulator, &StepRecord) -> ControlFlow<()>,
{
    fn after_step(&mut self, emulator: &Emulator, record: &StepRecord) -> ControlFlow<()> {
        self(emulator, record)
    }
}
