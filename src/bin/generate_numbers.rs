// generate_numbers.rs: expand the numbered type templates into generated sources.
// Usage: generate_numbers <output-base-directory> [--template-dir DIR]

use clap::Parser;
use std::process::exit;

use styleguide::runner::{logging, numbers};

fn main() {
    logging::init();
    let args = numbers::NumbersArgs::parse();

    if let Err(e) = numbers::run(&args) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}
