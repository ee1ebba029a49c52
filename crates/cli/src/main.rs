// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! groom binary entry point.
//!
//! Parses arguments, wires up run options, and maps command results to
//! process exit codes. Anything that escapes the command layer is caught
//! here and reported as exit 4.

mod cmd_check;
mod cmd_config;
mod cmd_fix;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use groom::cli::{Cli, Command, RunOptions};
use groom::color;
use groom::report::exit;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap routes --help/--version through the error path
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit::SUCCESS,
                _ => exit::USAGE,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.verbose);

    let options = RunOptions {
        verbose: cli.verbose,
        color: color::resolve_color(cli.color, cli.no_color),
        jobs: cli.jobs,
    };

    let result = match &cli.command {
        Command::Check(args) => cmd_check::run(args, &options),
        Command::Fix(args) => cmd_fix::run(args, &options),
        Command::Config(args) => cmd_config::run(args),
        Command::Version => {
            println!("groom {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::from(exit::SUCCESS))
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("groom: unexpected failure: {err:?}");
            ExitCode::from(exit::FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "groom=debug" } else { "groom=warn" };
    let filter =
        EnvFilter::try_from_env("GROOM_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
