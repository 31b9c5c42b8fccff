//! passgen — a small terminal password generator.
//!
//! This file is the application entry point. It is intentionally kept small
//! and is responsible only for:
//!
//! - Parsing CLI arguments
//! - Initialising logging
//! - Dispatching subcommands
//! - Exiting with appropriate status codes
//!
//! Generation lives in `generator.rs`, the option/result state in
//! `session.rs`, and all user interaction helpers in `ui.rs`.

use clap::Parser;
use console::style;

mod cli;
mod commands;
mod error;
mod generator;
mod session;
mod ui;

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = cli::Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .init();

    if let Err(e) = commands::dispatch(cli) {
        eprintln!("{} {}", style("error:").red(), e);
        std::process::exit(1);
    }
}
