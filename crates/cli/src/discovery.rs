// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from a start directory up toward the filesystem root collecting
//! every groom.toml on the way, stopping at the repository boundary.

use std::path::{Path, PathBuf};

/// Name of the config file groom looks for.
pub const CONFIG_FILE: &str = "groom.toml";

/// Collect the chain of config files that applies to `start_dir`.
///
/// The walk stops after the first directory containing `.git`. The chain is
/// returned outermost-first, so applying it in order lets the nearest file
/// override the others.
pub fn config_chain(start_dir: &Path) -> Vec<PathBuf> {
    let mut chain = Vec::new();
    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            chain.push(candidate);
        }

        // Stop at git root
        if current.join(".git").exists() {
            break;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    chain.reverse();
    chain
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
