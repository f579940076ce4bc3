//! tccgrant - grant microphone and camera access to installed applications
//!
//! Scans the applications directory, resolves the bundle identifier of every
//! application bundle and grants it Microphone and Camera access through the
//! privileged `tccplus` tool.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod granter;
mod operations;
mod resolver;
mod scanner;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Environment variable holding an `env_logger` filter, e.g. `tccgrant=trace`
const LOG_ENV: &str = "TCCGRANT_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => commands::grant::run(&cli.grant),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
