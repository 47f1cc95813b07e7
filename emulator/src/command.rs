use std::io::{self, Write};

use anyhow::anyhow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Missing argument {0}")]
    MissingArgument(usize),

    #[error("Bad argument {0} ({1})")]
    ParseError(usize, String),

    #[error("Argument {0} out of range ({1})")]
    OutOfRange(usize, usize),
}

pub struct Command(String);

impl Command {
    #[cfg(test)]
    pub fn new<S>(line: S) -> Self
    where
        S: Into<String>,
    {
        Self(line.into())
    }

    /// Reads one command line from stdin. `None` at end of input.
    pub fn prompt() -> anyhow::Result<Option<Self>> {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = io::stdin().lines().next() else {
            return Ok(None);
        };

        let line = line.map_err(|e| anyhow!("Couldn't read command from stdin: {}", e))?;
        Ok(Some(Self(line)))
    }

    pub fn args(&self) -> CommandArgs<impl Iterator<Item = &str>> {
        CommandArgs {
            iter: self.0.split_whitespace(),
            index: 0,
        }
    }
}

pub struct CommandArgs<I> {
    iter: I,
    index: usize,
}

impl<'a, I> CommandArgs<I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn next_opt(&mut self) -> Option<&'a str> {
        self.index += 1;
        self.iter.next()
    }

    pub fn next(&mut self) -> Result<&'a str, CommandError> {
        self.next_opt()
            .ok_or(CommandError::MissingArgument(self.index))
    }

    /// Decimal, or hexadecimal with a `0x` prefix.
    pub fn next_number(&mut self) -> Result<usize, CommandError> {
        let arg = self.next()?;
        parse_number(arg).map_err(|e| CommandError::ParseError(self.index, e))
    }

    pub fn next_number_or(&mut self, default: usize) -> Result<usize, CommandError> {
        match self.next_opt() {
            Some(arg) => parse_number(arg).map_err(|e| CommandError::ParseError(self.index, e)),
            None => Ok(default),
        }
    }

    pub fn next_address(&mut self) -> Result<u8, CommandError> {
        let value = self.next_number()?;
        u8::try_from(value).map_err(|_| CommandError::OutOfRange(self.index, value))
    }

    pub fn remaining(self) -> usize {
        self.iter.count()
    }
}

fn parse_number(arg: &str) -> Result<usize, String> {
    let parsed = match arg.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => arg.parse(),
    };

    parsed.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandError};

    #[test]
    fn numbers_in_both_bases() {
        let command = Command::new("b 0x1F 200");
        let mut args = command.args();

        assert_eq!(args.next().unwrap(), "b");
        assert_eq!(args.next_address().unwrap(), 0x1F);
        assert_eq!(args.next_number().unwrap(), 200);
        assert_eq!(args.next_number_or(7).unwrap(), 7);
        assert_eq!(args.remaining(), 0);
    }

    #[test]
    fn argument_errors() {
        let command = Command::new("jmp 300 nope");
        let mut args = command.args();
        args.next().unwrap();

        assert!(matches!(
            args.next_address(),
            Err(CommandError::OutOfRange(2, 300))
        ));
        assert!(matches!(
            args.next_number(),
            Err(CommandError::ParseError(3, _))
        ));
        assert!(matches!(
            args.next_number(),
            Err(CommandError::MissingArgument(4))
        ));
    }
}
