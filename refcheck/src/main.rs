// src/main.rs
use clap::Parser;
use std::process::ExitCode;

use refcheck::cli::{self, Args};

fn main() -> ExitCode {
    // try_parse so that usage errors exit with the same code as every
    // other failure.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
