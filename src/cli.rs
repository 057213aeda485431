use clap::Parser;
use core::fmt;
use std::fs::read_to_string;

use sasm::vm::{Interpreter, RuntimeError, StandardDevice};

/// Run a simplified assembler program from a text file.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The program file to interpret. Must end in `.txt`.
    #[clap(value_parser)]
    input: String,
}

enum Error {
    BadExtension(String),
    File(String, std::io::Error),
    Runtime(RuntimeError),
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadExtension(path) => write!(
                f,
                "file {}: extension not allowed, only .txt files can be read",
                path
            ),
            Error::File(path, e) => write!(f, "can't read from {}: {}", path, e),
            Error::Runtime(e) => write!(f, "{}", e),
        }
    }
}

fn read_file(name: &str) -> Result<String, Error> {
    read_to_string(name).map_err(|e| Error::File(name.to_string(), e))
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    if !args.input.ends_with(".txt") {
        return Err(Error::BadExtension(args.input));
    }
    let source = read_file(&args.input)?;

    Interpreter::new(StandardDevice)
        .run(&source)
        .map_err(Error::Runtime)
}
