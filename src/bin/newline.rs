// newline.rs: make every file under the repository root end with exactly one newline.
// Usage: newline [-v]

use clap::Parser;
use std::process::exit;

use styleguide::fs_op::NormalizeError;
use styleguide::runner::{logging, newline};

fn main() {
    logging::init();
    let args = newline::NewlineArgs::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = newline::run(&args, &mut out) {
        match e.downcast_ref::<NormalizeError>() {
            Some(NormalizeError::NoFiles { .. }) => eprintln!("Error: no files found to format"),
            _ => eprintln!("Error: {:#}", e),
        }
        exit(1);
    }
}
