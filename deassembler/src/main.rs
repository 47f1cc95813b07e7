use std::{env, fs, path::PathBuf, process::exit};

use libdeassembler::Deassembler;

fn main() {
    let path: PathBuf = env::args().skip(1).collect();

    if path.file_name().is_none() {
        eprintln!("Specify the program image path as arguments.");
        exit(1);
    }

    let program = match fs::read(&path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error reading program image {}: {}", path.display(), e);
            exit(1);
        }
    };

    if program.len() > libisa::MEMORY_SIZE {
        eprintln!(
            "Image is {} bytes, only the first {} are loaded as program.",
            program.len(),
            libisa::MEMORY_SIZE
        );
    }

    let deassembler = Deassembler::new(program.iter());
    print!("{}", deassembler.deassemble_text());
}
