use clap::Parser;
use roster_bbcode::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();
    commands::setup_logging(&args);

    match commands::run(args) {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
