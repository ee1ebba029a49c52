// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The check operation: report deviations, never write.

use std::path::Path;
use std::sync::Arc;

use termcolor::ColorChoice;

use crate::config::Config;
use crate::diff;
use crate::file_reader::FileContent;
use crate::format;
use crate::output::Emitter;

use super::{OpError, Operation, Outcome};

/// Compares each file with its reformatted form and renders a diff for
/// deviations. The file is never written.
pub struct CheckOp {
    emitter: Arc<Emitter>,
    color: ColorChoice,
}

impl CheckOp {
    pub fn new(emitter: Arc<Emitter>, color: ColorChoice) -> Self {
        Self { emitter, color }
    }
}

impl Operation for CheckOp {
    fn name(&self) -> &'static str {
        "check"
    }

    fn apply(&self, config: &Config, path: &Path, display: &str) -> Result<Outcome, OpError> {
        let content = FileContent::read(path).map_err(OpError::Read)?;
        let source = content.as_str().ok_or(OpError::Encoding)?;

        let formatted = format::reformat(source, &config.format);
        let outcome = if formatted == source {
            Outcome::correct().with_debug(format!("{display}: formatted correctly"))
        } else {
            Outcome::incorrect(diff::render(display, source, &formatted, self.color))
        };

        self.emitter.outcome(&outcome);
        Ok(outcome)
    }
}
