// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file operations and their outcome model.
//!
//! An [`Operation`] is the injected behavior the batch runner applies to
//! every work item. Failures are values, not unwinding: `apply` returns a
//! typed [`OpError`] so the runner can isolate them per file.

pub mod check;
pub mod fix;

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::config::Config;

pub use check::CheckOp;
pub use fix::FixOp;

/// How processing one file concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeKind {
    /// Content already matches its reformatted form.
    Correct,
    /// Content deviates; the file was left untouched.
    Incorrect,
    /// Content deviated and was rewritten in place.
    Fixed,
}

impl OutcomeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::Correct => "correct",
            OutcomeKind::Incorrect => "incorrect",
            OutcomeKind::Fixed => "fixed",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of processing one file. Produced once, never retried.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub kind: OutcomeKind,

    /// Low-priority diagnostic, shown only in verbose mode.
    pub debug: Option<String>,

    /// Payload shown regardless of verbosity (e.g. a rendered diff).
    pub info: Option<String>,
}

impl Outcome {
    pub fn correct() -> Self {
        Self {
            kind: OutcomeKind::Correct,
            debug: None,
            info: None,
        }
    }

    pub fn incorrect(info: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Incorrect,
            debug: None,
            info: Some(info.into()),
        }
    }

    pub fn fixed(info: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Fixed,
            debug: None,
            info: Some(info.into()),
        }
    }

    pub fn with_debug(mut self, msg: impl Into<String>) -> Self {
        self.debug = Some(msg.into());
        self
    }
}

/// A per-file processing failure. Never aborts sibling files; the runner
/// pairs it with the file's logical path when aggregating.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("failed to read: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write: {0}")]
    Write(#[source] std::io::Error),

    #[error("not valid UTF-8")]
    Encoding,
}

/// The injected per-file behavior. Implementations share the whole batch,
/// so they must be safe to call from worker threads concurrently.
pub trait Operation: Sync {
    fn name(&self) -> &'static str;

    /// Process one file. `path` is the on-disk location, `display` the
    /// logical path used for reporting.
    fn apply(&self, config: &Config, path: &Path, display: &str) -> Result<Outcome, OpError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
