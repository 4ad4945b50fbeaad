mod cli;
mod error;
mod extract;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = extract::execute(cli) {
        // failure diagnostics go to stdout, exit code signals the outcome
        println!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
