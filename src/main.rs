//! Command-line entry point.
//!
//! Parses arguments, initializes logging, runs the profiling flow and
//! exits non-zero on any error (missing file, undecodable input, empty
//! header).

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Reports print to stdout for piping

mod cli;

use clap::Parser as _;

fn main() -> anyhow::Result<()> {
    adstat::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run(&cli)
}
