// namedlog - named terminal/file logging
use clap::Parser;
use namedlog::cli::{execute_command, Args};

fn main() {
    let args = Args::parse();

    // A logger without a sink is fatal for the whole process.
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
