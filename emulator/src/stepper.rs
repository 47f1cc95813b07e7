use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use libemulator::{observer::Observer, Emulator, StepRecord};

use crate::render;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Dumps the machine after every instruction and waits for Enter. End of input stops the run.
pub struct Stepper<R, W> {
    input: R,
    output: W,
}

impl Stepper<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Stepper<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> Observer for Stepper<R, W>
where
    R: BufRead,
    W: Write,
{
    fn after_step(&mut self, emulator: &Emulator, record: &StepRecord) -> ControlFlow<()> {
        let shown = write!(
            self.output,
            "{}{}",
            CLEAR_SCREEN,
            render::dump(emulator, Some(record))
        )
        .and_then(|_| self.output.flush());

        if let Err(e) = shown {
            log::error!("Couldn't write machine dump: {}", e);
            return ControlFlow::Break(());
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => ControlFlow::Break(()),
            Ok(_) => ControlFlow::Continue(()),
            Err(e) => {
                log::error!("Couldn't read from stdin: {}", e);
                ControlFlow::Break(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use libemulator::{Emulator, HaltReason, RunOutcome};
    use libisa::Register;

    use super::{Stepper, CLEAR_SCREEN};

    #[test]
    fn end_of_input_stops_the_run() {
        let mut emulator = Emulator::new(&[0x21, 0x22, 0x23, 0xD0]);
        let mut output = Vec::new();

        let outcome = {
            let mut stepper = Stepper::with_io(Cursor::new("\n"), &mut output);
            emulator.run_observed(&mut stepper, None)
        };

        assert_eq!(outcome, RunOutcome::Stopped { steps: 2 });
        assert!(!emulator.is_halted());
        assert_eq!(emulator.register(Register::A), 2);

        let output = String::from_utf8(output).expect("Output isn't UTF-8");
        assert_eq!(output.matches(CLEAR_SCREEN).count(), 2);
    }

    #[test]
    fn enter_per_step_runs_to_halt() {
        let mut emulator = Emulator::new(&[0x2F, 0xD0]);

        let outcome = emulator.run_observed(
            &mut Stepper::with_io(Cursor::new("\n\n"), Vec::new()),
            None,
        );

        assert_eq!(
            outcome,
            RunOutcome::Halted {
                steps: 2,
                reason: HaltReason::Instruction
            }
        );
        assert_eq!(emulator.register(Register::A), 0xF);
    }
}
