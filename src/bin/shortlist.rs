//! Entry point for the shortlist command line tool.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use shortlist::cli::args::ShortlistArgs;
use shortlist::cli::commands::execute_command;

/// Map the -v/-q flags onto a log filter. Warnings (skipped duplicates,
/// truncated skill lists) are visible by default.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn run() -> anyhow::Result<()> {
    let args = ShortlistArgs::parse();
    init_logging(args.verbosity());
    execute_command(args).context("shortlist command failed")
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
