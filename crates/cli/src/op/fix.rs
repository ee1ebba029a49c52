// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fix operation: rewrite deviating files in place.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::format;
use crate::output::Emitter;

use super::{OpError, Operation, Outcome};

/// Rewrites each deviating file with its reformatted content. The
/// overwrite is not transactional: a crash mid-write can leave a partial
/// file.
pub struct FixOp {
    emitter: Arc<Emitter>,
}

impl FixOp {
    pub fn new(emitter: Arc<Emitter>) -> Self {
        Self { emitter }
    }
}

impl Operation for FixOp {
    fn name(&self) -> &'static str {
        "fix"
    }

    fn apply(&self, config: &Config, path: &Path, display: &str) -> Result<Outcome, OpError> {
        // Reading owned up front: the buffer is rewritten anyway.
        let bytes = fs::read(path).map_err(OpError::Read)?;
        let source = String::from_utf8(bytes).map_err(|_| OpError::Encoding)?;

        let formatted = format::reformat(&source, &config.format);
        let outcome = if formatted == source {
            Outcome::correct().with_debug(format!("{display}: formatted correctly"))
        } else {
            fs::write(path, &formatted).map_err(OpError::Write)?;
            Outcome::fixed(format!("reformatted {display}"))
        };

        self.emitter.outcome(&outcome);
        Ok(outcome)
    }
}
