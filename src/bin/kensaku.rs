//! Kensaku CLI binary.

use clap::Parser;
use kensaku::cli::{args::KensakuArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = KensakuArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
