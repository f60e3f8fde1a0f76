use clap::Parser;
use rledger::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
