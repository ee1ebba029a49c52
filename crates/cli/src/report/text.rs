// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! Error detail lines first, then a one-line summary naming only the
//! outcome kinds actually observed.

use std::io::Write;

use termcolor::{Buffer, ColorChoice, WriteColor};

use crate::color::{self, scheme};
use crate::op::OutcomeKind;
use crate::runner::RunReport;

use super::ReportFormatter;

/// Text format report formatter.
pub struct TextFormatter {
    color: ColorChoice,
}

impl TextFormatter {
    pub fn new(color: ColorChoice) -> Self {
        Self { color }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport, mode: &str) -> anyhow::Result<String> {
        let mut buf = if color::is_colored(self.color) {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };

        for error in &report.errors {
            buf.set_color(&scheme::fail())?;
            write!(buf, "error")?;
            buf.reset()?;
            writeln!(buf, ": {}: {}", error.path, error.message)?;
        }

        let mut segments: Vec<String> = report
            .counts
            .iter()
            .map(|(kind, count)| format!("{count} {kind}"))
            .collect();
        if !report.errors.is_empty() {
            segments.push(format!("{} failed", report.errors.len()));
        }
        let tally = if segments.is_empty() {
            "nothing to do".to_string()
        } else {
            segments.join(", ")
        };

        writeln!(
            buf,
            "{mode}: {tally} ({} files in {} ms)",
            report.total(),
            report.elapsed_millis()
        )?;

        let fixed = report.count(OutcomeKind::Fixed);
        if fixed > 0 {
            writeln!(buf, "corrected {fixed} file(s)")?;
        }

        Ok(String::from_utf8_lossy(buf.as_slice()).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
