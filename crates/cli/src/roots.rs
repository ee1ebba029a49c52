// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Root resolution.
//!
//! Turns user-supplied path arguments into canonical absolute roots. A path
//! that cannot be canonicalized fails the whole invocation: an invalid root
//! is a usage error, not a data error.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal root resolution failure.
#[derive(Debug, Error)]
pub enum RootError {
    #[error("cannot resolve {path}: {source}")]
    Resolve {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// A canonicalized, absolute starting location (file or directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    path: PathBuf,
}

impl Root {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve the given path arguments into roots, preserving order.
///
/// With no arguments the current directory is the single root.
pub fn resolve_roots(paths: &[PathBuf]) -> Result<Vec<Root>, RootError> {
    if paths.is_empty() {
        let cwd = std::env::current_dir().map_err(RootError::CurrentDir)?;
        let path = std::fs::canonicalize(&cwd).map_err(|source| RootError::Resolve {
            path: cwd.display().to_string(),
            source,
        })?;
        return Ok(vec![Root { path }]);
    }

    paths
        .iter()
        .map(|arg| {
            std::fs::canonicalize(arg)
                .map(|path| Root { path })
                .map_err(|source| RootError::Resolve {
                    path: arg.display().to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "roots_tests.rs"]
mod tests;
