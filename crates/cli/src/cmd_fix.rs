// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `groom fix` command.

use std::process::ExitCode;
use std::sync::Arc;

use groom::cli::{FixArgs, OutputFormat, RunOptions};
use groom::op::FixOp;
use groom::output::Emitter;
use groom::report::{self, exit};
use groom::roots;
use groom::runner::{BatchError, BatchRunner};
use groom::verbose::VerboseLogger;

use crate::cmd_check::{log_roots, log_summary};

pub fn run(args: &FixArgs, options: &RunOptions) -> anyhow::Result<ExitCode> {
    let roots = match roots::resolve_roots(&args.paths) {
        Ok(roots) => roots,
        Err(err) => {
            eprintln!("groom: {err}");
            return Ok(ExitCode::from(exit::USAGE));
        }
    };

    let verbose = VerboseLogger::new(options.verbose);
    log_roots(&verbose, &roots);

    let emitter = Arc::new(match args.output {
        OutputFormat::Text => Emitter::new(options.color, options.verbose),
        OutputFormat::Json => Emitter::disabled(),
    });
    let operation = FixOp::new(emitter);

    let mut runner = BatchRunner::new(options.jobs);
    if let Ok(cwd) = std::env::current_dir() {
        runner = runner.display_base(cwd);
    }

    let report = match runner.run(&roots, &operation) {
        Ok(report) => report,
        Err(BatchError::Config(err)) => {
            eprintln!("groom: {err}");
            return Ok(ExitCode::from(exit::USAGE));
        }
        Err(err) => return Err(err.into()),
    };

    let rendered = report::format_report(args.output, &report, "fix", options.color)?;
    print!("{rendered}");
    log_summary(&verbose, &report);

    Ok(ExitCode::from(report::verdict(&report).exit_code()))
}
