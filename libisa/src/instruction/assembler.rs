use super::{AssemblyError, Instruction};

/// Encodes instructions into a program image, one byte each.
pub fn assemble<I>(instructions: I) -> Result<Vec<u8>, AssemblyError>
where
    I: IntoIterator<Item = Instruction>,
{
    let machine_code: Vec<_> = instructions
        .into_iter()
        .map(|instruction| instruction.encode())
        .collect();

    if machine_code.len() > crate::MEMORY_SIZE {
        return Err(AssemblyError::ProgramTooLarge(machine_code.len()));
    }

    Ok(machine_code)
}
