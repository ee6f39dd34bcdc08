//! Kaprekar CLI: the `kaprekar` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            number,
            routine,
            json,
        } => commands::run::run(number, routine, json),

        Commands::Range {
            from,
            to,
            routine,
            json,
        } => commands::range::run(from, to, routine, json),
    }
}
