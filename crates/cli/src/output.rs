// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronized console output for concurrent operations.
//!
//! Stdout is process-wide; work items finish on worker threads in any
//! order. The emitter takes one lock per outcome so each payload lands on
//! the stream whole, never interleaved with a sibling's.

use std::io::Write;
use std::sync::Mutex;

use termcolor::{ColorChoice, StandardStream};

use crate::op::Outcome;

/// Writes per-file payloads to stdout atomically.
pub struct Emitter {
    out: Option<Mutex<StandardStream>>,
    verbose: bool,
}

impl Emitter {
    pub fn new(color: ColorChoice, verbose: bool) -> Self {
        Self {
            out: Some(Mutex::new(StandardStream::stdout(color))),
            verbose,
        }
    }

    /// An emitter that swallows everything. Used when stdout carries a
    /// single document (JSON output) instead of a live stream.
    pub fn disabled() -> Self {
        Self {
            out: None,
            verbose: false,
        }
    }

    /// Write an outcome's payloads: `debug` only in verbose mode, `info`
    /// always.
    pub fn outcome(&self, outcome: &Outcome) {
        let Some(out) = &self.out else { return };
        let debug = outcome.debug.as_deref().filter(|_| self.verbose);
        let info = outcome.info.as_deref();
        if debug.is_none() && info.is_none() {
            return;
        }

        let mut out = out.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(msg) = debug {
            let _ = writeln!(out, "{msg}");
        }
        if let Some(payload) = info {
            let _ = write!(out, "{payload}");
            if !payload.ends_with('\n') {
                let _ = writeln!(out);
            }
        }
        let _ = out.flush();
    }
}
