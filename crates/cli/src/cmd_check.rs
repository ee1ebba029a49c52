// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `groom check` command.

use std::process::ExitCode;
use std::sync::Arc;

use groom::cli::{CheckArgs, OutputFormat, RunOptions};
use groom::op::CheckOp;
use groom::output::Emitter;
use groom::report::{self, exit};
use groom::roots::{self, Root};
use groom::runner::{BatchError, BatchRunner, RunReport};
use groom::verbose::VerboseLogger;

pub fn run(args: &CheckArgs, options: &RunOptions) -> anyhow::Result<ExitCode> {
    let roots = match roots::resolve_roots(&args.paths) {
        Ok(roots) => roots,
        Err(err) => {
            eprintln!("groom: {err}");
            return Ok(ExitCode::from(exit::USAGE));
        }
    };

    let verbose = VerboseLogger::new(options.verbose);
    log_roots(&verbose, &roots);

    // JSON output owns stdout, so the live per-file stream is disabled.
    let emitter = Arc::new(match args.output {
        OutputFormat::Text => Emitter::new(options.color, options.verbose),
        OutputFormat::Json => Emitter::disabled(),
    });
    let operation = CheckOp::new(emitter, options.color);

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

    let rendered = report::format_report(args.output, &report, "check", options.color)?;
    print!("{rendered}");
    log_summary(&verbose, &report);

    Ok(ExitCode::from(report::verdict(&report).exit_code()))
}

pub(crate) fn log_roots(verbose: &VerboseLogger, roots: &[Root]) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section("Roots");
    for root in roots {
        verbose.log(&root.path().display().to_string());
    }
}

pub(crate) fn log_summary(verbose: &VerboseLogger, report: &RunReport) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section("Summary");
    verbose.log(&format!(
        "{} files in {} ms",
        report.total(),
        report.elapsed_millis()
    ));
}
