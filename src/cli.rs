use clap::Parser;

/// The tool takes no arguments; clap supplies `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "self-heal",
    version,
    about = "Recreate the placeholder C++ smoke test at tests/test_basic.cpp if it is missing"
)]
pub struct Cli {}

pub fn parse() -> Cli {
    Cli::parse()
}
