// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering and exit policy.
//!
//! The batch runner returns data; this module decides what the process
//! says and with which code it exits.

mod json;
mod text;

use termcolor::ColorChoice;

use crate::cli::OutputFormat;
use crate::op::OutcomeKind;
use crate::runner::RunReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Process exit codes.
pub mod exit {
    /// Everything correct (or fixed).
    pub const SUCCESS: u8 = 0;
    /// Bad arguments, unresolvable roots, invalid configuration.
    pub const USAGE: u8 = 1;
    /// Formatting violations found by check.
    pub const VIOLATIONS: u8 = 2;
    /// Per-file processing errors occurred.
    pub const PROCESSING: u8 = 3;
    /// A failure escaped the command layer.
    pub const FAILURE: u8 = 4;
}

/// Severity class of a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Violations,
    ProcessingErrors,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Success => exit::SUCCESS,
            Verdict::Violations => exit::VIOLATIONS,
            Verdict::ProcessingErrors => exit::PROCESSING,
        }
    }
}

/// Map a report to its verdict. Total over every reachable report:
/// processing errors dominate, then violations, then success. Fix never
/// produces `incorrect`, so applied fixes stay informational.
pub fn verdict(report: &RunReport) -> Verdict {
    if !report.errors.is_empty() {
        Verdict::ProcessingErrors
    } else if report.count(OutcomeKind::Incorrect) > 0 {
        Verdict::Violations
    } else {
        Verdict::Success
    }
}

/// Trait for formatting a run report into an output document.
pub trait ReportFormatter {
    /// `mode` is the operation name the batch ran ("check" or "fix").
    fn format(&self, report: &RunReport, mode: &str) -> anyhow::Result<String>;
}

/// Render a report in the requested format.
pub fn format_report(
    format: OutputFormat,
    report: &RunReport,
    mode: &str,
    color: ColorChoice,
) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(report, mode)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
