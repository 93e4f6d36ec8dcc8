//! # ddply CLI
//!
//! This is the binary entry point for the `ddply` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the deploy described by the arguments.
//! - Translating top-level failures into the documented exit codes.
//!
//! The core application logic is defined in the `lib.rs` library crate,
//! ensuring that the binary is a thin wrapper around the reusable library
//! functionality.

mod cli;

use clap::Parser;
use std::process;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli.execute() {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}
